use crate::{
    cursor::token::TokenSyntaxError,
    value::{LiteralError, ValueKind},
};
use thiserror::Error as ThisError;

///
/// CursorError
///
/// Skiptoken validation failures. Every variant is caused by client input
/// and maps to a client-error response.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CursorError {
    /// Skiptoken text could not be split into literals.
    #[error("malformed skiptoken: {reason}")]
    MalformedToken { reason: TokenSyntaxError },

    /// Skiptoken literal count does not match the ordering.
    #[error("skiptoken arity mismatch: expected {expected} values, found {found}")]
    TokenArity { expected: usize, found: usize },

    /// Literal kind at one position is incompatible with its ordering field.
    #[error(
        "skiptoken type mismatch at position {position}: expected {expected}, found {provided}"
    )]
    TokenTypeMismatch {
        position: usize,
        expected: ValueKind,
        provided: ValueKind,
    },

    /// Literal looked like its kind but its payload did not convert.
    #[error("skiptoken value at position {position} is invalid: {reason}")]
    TokenFormat {
        position: usize,
        reason: LiteralError,
    },
}

impl CursorError {
    // Construct one arity mismatch.
    pub(crate) const fn arity(expected: usize, found: usize) -> Self {
        Self::TokenArity { expected, found }
    }

    // Construct one positional type mismatch.
    pub(crate) const fn type_mismatch(
        position: usize,
        expected: ValueKind,
        provided: ValueKind,
    ) -> Self {
        Self::TokenTypeMismatch {
            position,
            expected,
            provided,
        }
    }

    // Construct one positional literal conversion failure.
    pub(crate) const fn format(position: usize, reason: LiteralError) -> Self {
        Self::TokenFormat { position, reason }
    }

    /// Payload-free classification, suitable for telemetry.
    #[must_use]
    pub const fn kind(&self) -> CursorErrorKind {
        match self {
            Self::MalformedToken { .. } => CursorErrorKind::Malformed,
            Self::TokenArity { .. } => CursorErrorKind::Arity,
            Self::TokenTypeMismatch { .. } => CursorErrorKind::TypeMismatch,
            Self::TokenFormat { .. } => CursorErrorKind::Format,
        }
    }
}

impl From<TokenSyntaxError> for CursorError {
    fn from(reason: TokenSyntaxError) -> Self {
        Self::MalformedToken { reason }
    }
}

///
/// CursorErrorKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CursorErrorKind {
    Malformed,
    Arity,
    TypeMismatch,
    Format,
}
