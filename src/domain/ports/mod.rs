//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and UI layers provide concrete implementations.

pub mod file_system;
pub mod run_events;

pub use file_system::{FileSystem, FsError, FsResult};
pub use run_events::{NoopEventSink, RunEvent, RunEventSink};
