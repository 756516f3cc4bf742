//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the documentation pipeline and
//! an external system (the filesystem, the host framework's model registry).
//! Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod registry;

pub use filesystem::FileSystem;
pub use registry::ModelRegistry;
