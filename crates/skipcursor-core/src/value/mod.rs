mod codec;
mod compare;

#[cfg(test)]
mod tests;

use skipcursor_primitives::ScalarKind;
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

// re-exports
pub use codec::{LiteralError, NULL_LITERAL, format_literal, infer_kind, parse_literal};
pub use compare::canonical_cmp;

///
/// Value
///
/// Closed set of values an ordering field can hold.
///
/// Null      → the field is SQL NULL, or a relation on the path is absent.
/// DateTime  → always normalized to UTC by the codec.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    DateTime(OffsetDateTime),
    Float(f64),
    Guid(Uuid),
    Int(i64),
    Text(String),
}

impl Value {
    /// Return the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Scalar(ScalarKind::Bool),
            Self::DateTime(_) => ValueKind::Scalar(ScalarKind::DateTime),
            Self::Float(_) => ValueKind::Scalar(ScalarKind::Float),
            Self::Guid(_) => ValueKind::Scalar(ScalarKind::Guid),
            Self::Int(_) => ValueKind::Scalar(ScalarKind::Int),
            Self::Text(_) => ValueKind::Scalar(ScalarKind::Text),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Guid(value)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(value: OffsetDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

///
/// ValueKind
///
/// Kind tag carried by a parsed cursor slot.
/// `Null` is the reserved null marker and is compatible with every kind.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    Null,
    Scalar(ScalarKind),
}

impl ValueKind {
    /// Whether a value of kind `provided` may be assigned to a field declared
    /// as `declared`: identity, or either side is the null kind.
    #[must_use]
    pub fn is_compatible(declared: Self, provided: Self) -> bool {
        declared == provided || declared.is_null() || provided.is_null()
    }

    #[must_use]
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<ScalarKind> for ValueKind {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Scalar(kind) => write!(f, "{kind}"),
        }
    }
}
