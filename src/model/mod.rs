//! Model metadata supplied by the host framework.
//!
//! These are plain read-only records: one [`ModelDescriptor`] per
//! application entity, each with its ordered [`FieldDescriptor`]s. They live
//! for a single extraction run and are never mutated once loaded.

mod entity;
mod field;

pub use entity::{EntityRef, ModelDescriptor};
pub use field::{map_type, FieldDescriptor, FieldKind, ScalarKind, UNDEFINED_TYPE};
