//! Adapter implementations of the port traits.
//!
//! `live` talks to the real disk and the host's manifest; `memory` keeps
//! everything in process for tests and embedding.

pub mod live;
pub mod memory;
