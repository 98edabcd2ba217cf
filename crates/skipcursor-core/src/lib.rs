//! Cursor pagination over sorted in-memory rows: skiptoken parsing and
//! validation, resume-point search, and next-page token construction.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod cursor;
pub mod error;
pub mod model;
pub mod obs;
pub mod order;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or codec helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        config::CursorConfig,
        cursor::{Page, PageRequest, PositionDescriptor},
        model::{ModelRegistry, Record, ResourceModel},
        order::{OrderDirection, OrderSegment, OrderSpec, ResolvedOrder},
        value::Value,
    };
    pub use skipcursor_primitives::ScalarKind;
}
