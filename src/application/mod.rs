//! Application Layer
//!
//! Use cases that orchestrate one run over a manifest.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Owns the load-once, persist-once lifecycle
//!
//! ## Use Cases
//!
//! - `RegisterUseCase` - register source files (check, insert or skip, persist)
//! - `UnregisterUseCase` - remove every mention of display names

mod manifest_io;
pub mod register;
pub mod unregister;

pub use manifest_io::load as load_manifest;
pub use register::{FileOutcome, FileReport, RegisterOptions, RegisterReport, RegisterUseCase};
pub use unregister::{UnregisterOptions, UnregisterReport, UnregisterUseCase};
