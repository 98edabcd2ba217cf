use crate::cursor::CursorError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// PaginationError
///
/// Top-level failure surfaced by every pagination entrypoint.
/// `Cursor` is bad client input (4xx); `Internal` is a wiring fault (5xx).
///

#[derive(Debug, ThisError)]
pub enum PaginationError {
    #[error(transparent)]
    Cursor(#[from] CursorError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl PaginationError {
    /// Return the runtime classification for this failure.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Cursor(_) => ErrorClass::InvalidInput,
            Self::Internal(err) => err.class,
        }
    }

    /// True when the caller should answer with a client-error status.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.class(), ErrorClass::InvalidInput)
    }

    /// Borrow the cursor error, if this failure came from client input.
    #[must_use]
    pub const fn as_cursor(&self) -> Option<&CursorError> {
        match self {
            Self::Cursor(err) => Some(err),
            Self::Internal(_) => None,
        }
    }
}

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Raised only when the caller's ordering or row wiring disagrees with the
/// declared resource shape; never caused by skiptoken content.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a path-resolution invariant violation.
    ///
    /// `path` is the full dotted ordering path, `step` the index of the step
    /// that failed to resolve.
    pub(crate) fn path_resolution(
        origin: ErrorOrigin,
        resource: impl Into<String>,
        path: impl Into<String>,
        step: usize,
        reason: impl Into<String>,
    ) -> Self {
        let resource = resource.into();
        let path = path.into();
        let reason = reason.into();

        Self {
            class: ErrorClass::InvariantViolation,
            origin,
            message: format!(
                "cannot resolve ordering path '{path}' on '{resource}' at step {step}: {reason}"
            ),
            detail: Some(ErrorDetail::PathResolution(PathResolutionError {
                resource,
                path,
                step,
                reason,
            })),
        }
    }

    /// Construct a configuration error.
    pub(crate) fn config_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Unsupported, ErrorOrigin::Config, message)
    }

    /// Construct a model-origin invariant violation.
    pub(crate) fn model_invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvariantViolation, ErrorOrigin::Model, message)
    }

    #[must_use]
    pub const fn is_path_resolution(&self) -> bool {
        matches!(self.detail, Some(ErrorDetail::PathResolution(_)))
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    PathResolution(PathResolutionError),
}

///
/// PathResolutionError
///
/// An ordering path step that does not exist on the declared shape, or a
/// row whose layout disagrees with its model.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("path '{path}' on '{resource}' failed at step {step}: {reason}")]
pub struct PathResolutionError {
    pub resource: String,
    pub path: String,
    pub step: usize,
    pub reason: String,
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    InvariantViolation,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::InvariantViolation => "invariant_violation",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Config,
    Cursor,
    Model,
    Order,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Cursor => "cursor",
            Self::Model => "model",
            Self::Order => "order",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_resolution_carries_structured_detail() {
        let err = InternalError::path_resolution(
            ErrorOrigin::Order,
            "Product",
            "category.title",
            1,
            "field not found",
        );

        assert!(err.is_path_resolution());
        assert_eq!(err.class, ErrorClass::InvariantViolation);
        assert_eq!(
            err.display_with_class(),
            concat!(
                "order:invariant_violation: cannot resolve ordering path 'category.title' ",
                "on 'Product' at step 1: field not found"
            )
        );

        let Some(ErrorDetail::PathResolution(detail)) = err.detail else {
            panic!("path resolution detail should be present");
        };
        assert_eq!(detail.step, 1);
        assert_eq!(detail.path, "category.title");
    }

    #[test]
    fn pagination_error_classifies_client_and_internal_failures() {
        let client = PaginationError::from(CursorError::arity(2, 1));
        assert!(client.is_client_error());
        assert_eq!(client.class(), ErrorClass::InvalidInput);
        assert!(client.as_cursor().is_some());

        let internal = PaginationError::from(InternalError::model_invariant("row slot mismatch"));
        assert!(!internal.is_client_error());
        assert_eq!(internal.class(), ErrorClass::InvariantViolation);
        assert!(internal.as_cursor().is_none());
    }
}
