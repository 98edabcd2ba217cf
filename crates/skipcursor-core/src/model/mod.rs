//! Declared resource shapes and the rows built from them.

mod record;
mod registry;
mod resource;


pub use record::{Record, Slot};
pub use registry::ModelRegistry;
pub use resource::{FieldKind, FieldModel, ResourceModel};
