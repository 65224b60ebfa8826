//! Register Use Case
//!
//! Orchestrates one registration run.
//!
//! This module handles:
//! - Loading the manifest once
//! - Checking each requested file for an existing registration
//! - Inserting the coupled records for new files
//! - Writing the manifest back once, only if it changed

mod options;
mod result;
mod use_case;

pub use options::RegisterOptions;
pub use result::{FileOutcome, FileReport, RegisterReport};
pub use use_case::RegisterUseCase;
