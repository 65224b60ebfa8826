//! pbxedit - Xcode project manifest editor
//!
//! Registers source files with build targets and groups in a
//! `project.pbxproj`, and removes them again. The manifest is parsed into a
//! lossless model, edited in memory, and written back once, so repeated runs
//! are idempotent and untouched lines keep their exact bytes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    FileOutcome, RegisterOptions, RegisterReport, RegisterUseCase, UnregisterOptions,
    UnregisterReport, UnregisterUseCase,
};
pub use domain::entities::Manifest;
pub use domain::services::{DuplicateCheck, RegistrationRequest, TargetSelector};
pub use domain::value_objects::{Identifier, IdentifierSource, RandomIdentifiers, SequentialIdentifiers};
pub use error::{PbxError, PbxResult};
pub use infrastructure::LocalFs;
