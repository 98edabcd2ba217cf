//! Skiptoken text: splitting into literals, kind inference, and the
//! symmetric rendering of a row's ordering values.

mod error;
mod lexer;

use crate::{
    config::CursorConfig,
    cursor::CursorError,
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::Record,
    order::ResolvedOrder,
    value::{Value, ValueKind, format_literal, infer_kind, parse_literal},
};
use derive_more::{Deref, IntoIterator};
use std::fmt;

pub use error::TokenSyntaxError;

/// Separator between literals in a skiptoken.
pub const LITERAL_SEPARATOR: char = ',';

///
/// SkipTokenValue
///
/// One parsed skiptoken slot: the literal exactly as it appeared (trimmed)
/// and the value it converts to.
///

#[derive(Clone, Debug, PartialEq)]
pub struct SkipTokenValue {
    literal: String,
    value: Value,
}

impl SkipTokenValue {
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Inferred kind; `ValueKind::Null` for the null marker.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}

///
/// SkipTokenValues
///
/// Ordered skiptoken slots, one per ordering segment once validated.
/// Displays as the skiptoken text.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct SkipTokenValues(Vec<SkipTokenValue>);

impl SkipTokenValues {
    /// Render the ordering values of `row` as skiptoken slots.
    ///
    /// Every literal produced here parses back to the same kind and value.
    pub fn from_row(order: &ResolvedOrder, row: &Record) -> Result<Self, InternalError> {
        order.check_row(row)?;

        order
            .segments()
            .iter()
            .map(|segment| -> Result<SkipTokenValue, InternalError> {
                let value = segment.read(row)?;
                let literal = format_literal(value).map_err(|err| {
                    InternalError::new(
                        ErrorClass::Unsupported,
                        ErrorOrigin::Cursor,
                        format!("cannot render '{}' as a skiptoken literal: {err}", segment.path()),
                    )
                })?;

                Ok(SkipTokenValue {
                    literal,
                    value: value.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for SkipTokenValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, slot) in self.0.iter().enumerate() {
            if position > 0 {
                write!(f, "{LITERAL_SEPARATOR}")?;
            }
            f.write_str(&slot.literal)?;
        }

        Ok(())
    }
}

/// Parse untrusted skiptoken text into ordered slots.
///
/// Each literal's kind is inferred from its shape and its payload converted
/// immediately, so a value that looks right but does not convert fails here.
pub fn parse_skiptoken(token: &str, config: &CursorConfig) -> Result<SkipTokenValues, CursorError> {
    if token.len() > config.max_token_len {
        return Err(TokenSyntaxError::TooLong {
            len: token.len(),
            max: config.max_token_len,
        }
        .into());
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(TokenSyntaxError::Empty.into());
    }

    lexer::split_literals(token)?
        .into_iter()
        .enumerate()
        .map(|(position, fragment)| -> Result<SkipTokenValue, CursorError> {
            let kind = infer_kind(fragment).ok_or_else(|| TokenSyntaxError::UnrecognizedLiteral {
                position,
                literal: fragment.to_string(),
            })?;
            let value = parse_literal(fragment, kind)
                .map_err(|err| CursorError::format(position, err))?;

            Ok(SkipTokenValue {
                literal: fragment.to_string(),
                value,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(SkipTokenValues)
}
