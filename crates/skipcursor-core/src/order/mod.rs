//! Multi-column ordering: the client-facing request, its resolved accessor
//! table, and the row comparator derived from it.

mod compare;
mod resolve;


use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use compare::apply_order_direction;
pub use resolve::{ResolvedOrder, ResolvedSegment};

/// Separator between path steps in a dotted ordering path.
pub const PATH_SEPARATOR: char = '.';

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    #[default]
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

///
/// OrderSegment
///
/// One (possibly nested) column of a multi-column sort. Every step but the
/// last names a relation; the last names the sortable scalar field.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderSegment {
    pub path: Vec<String>,
    pub direction: OrderDirection,
}

impl OrderSegment {
    /// Build a segment from a dotted path such as `category.title`.
    #[must_use]
    pub fn new(path: &str, direction: OrderDirection) -> Self {
        Self {
            path: path.split(PATH_SEPARATOR).map(str::to_string).collect(),
            direction,
        }
    }

    #[must_use]
    pub fn asc(path: &str) -> Self {
        Self::new(path, OrderDirection::Asc)
    }

    #[must_use]
    pub fn desc(path: &str) -> Self {
        Self::new(path, OrderDirection::Desc)
    }

    /// Dotted rendering of the path, for diagnostics.
    #[must_use]
    pub fn dotted(&self) -> String {
        self.path.join(&PATH_SEPARATOR.to_string())
    }
}

impl fmt::Display for OrderSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dotted(), self.direction)
    }
}

///
/// OrderSpec
///
/// Ordering requested for one resource, before resolution.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderSpec {
    pub resource: String,
    pub segments: Vec<OrderSegment>,
}

impl OrderSpec {
    #[must_use]
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn then(mut self, segment: OrderSegment) -> Self {
        self.segments.push(segment);
        self
    }

    #[must_use]
    pub fn then_asc(self, path: &str) -> Self {
        self.then(OrderSegment::asc(path))
    }

    #[must_use]
    pub fn then_desc(self, path: &str) -> Self {
        self.then(OrderSegment::desc(path))
    }
}
