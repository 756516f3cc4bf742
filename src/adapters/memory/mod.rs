//! In-process adapters with no external side effects.

pub mod filesystem;
pub mod registry;

pub use filesystem::MemoryFileSystem;
pub use registry::StaticRegistry;
