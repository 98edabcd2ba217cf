//! Declared scalar kinds shared by the model and cursor layers.

use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ScalarKind
///
/// Canonical scalar kind a sortable field may be declared with.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ScalarKind {
    Bool,
    DateTime,
    Float,
    Guid,
    Int,
    Text,
}

impl ScalarKind {
    /// Return the full metadata descriptor for one scalar kind.
    #[must_use]
    pub const fn metadata(self) -> ScalarMetadata {
        match self {
            Self::Bool => ScalarMetadata {
                name: "bool",
                family: ScalarFamily::Bool,
                literal_prefix: None,
            },
            Self::DateTime => ScalarMetadata {
                name: "datetime",
                family: ScalarFamily::Temporal,
                literal_prefix: Some("datetime"),
            },
            Self::Float => ScalarMetadata {
                name: "float",
                family: ScalarFamily::Numeric,
                literal_prefix: None,
            },
            Self::Guid => ScalarMetadata {
                name: "guid",
                family: ScalarFamily::Identifier,
                literal_prefix: Some("guid"),
            },
            Self::Int => ScalarMetadata {
                name: "int",
                family: ScalarFamily::Numeric,
                literal_prefix: None,
            },
            Self::Text => ScalarMetadata {
                name: "text",
                family: ScalarFamily::Textual,
                literal_prefix: None,
            },
        }
    }

    /// Return the lowercase display name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.metadata().name
    }

    /// Return the coarse family this kind belongs to.
    #[must_use]
    pub const fn family(self) -> ScalarFamily {
        self.metadata().family
    }

    /// Return the tag written in front of a quoted literal, if the kind uses one.
    #[must_use]
    pub const fn literal_prefix(self) -> Option<&'static str> {
        self.metadata().literal_prefix
    }

    /// Resolve a kind from its tagged-literal prefix (`datetime`, `guid`).
    #[must_use]
    pub fn from_literal_prefix(prefix: &str) -> Option<Self> {
        ALL_SCALAR_KINDS.into_iter().find(|kind| {
            kind.literal_prefix()
                .is_some_and(|p| p.eq_ignore_ascii_case(prefix))
        })
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// ScalarMetadata
///
/// Static descriptor shared across model/codec layers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMetadata {
    pub name: &'static str,
    pub family: ScalarFamily,
    pub literal_prefix: Option<&'static str>,
}

///
/// ScalarFamily
///
/// Coarse classification. Informational only; cursor compatibility is
/// decided on exact kinds, never on families.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarFamily {
    Bool,
    Identifier,
    Numeric,
    Temporal,
    Textual,
}

/// Ordered list of all scalar kinds.
pub const ALL_SCALAR_KINDS: [ScalarKind; 6] = [
    ScalarKind::Bool,
    ScalarKind::DateTime,
    ScalarKind::Float,
    ScalarKind::Guid,
    ScalarKind::Int,
    ScalarKind::Text,
];

///
/// TESTS
///
