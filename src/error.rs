//! Error types for pbxedit
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.
//! Only run-aborting conditions are errors. A missing section, group or
//! target for one file is reported as a skipped step instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for pbxedit operations
pub type PbxResult<T> = Result<T, PbxError>;

/// Main error type for pbxedit operations
#[derive(Error, Debug)]
pub enum PbxError {
    /// The manifest to edit does not exist
    #[error("manifest not found: {path}")]
    MissingManifest { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The edited manifest could not be persisted; the file on disk is unchanged
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("plan file not found: {path}")]
    MissingPlan { path: PathBuf },

    /// The plan file is not valid TOML or has a bad value
    #[error("invalid plan in {file}: {message}")]
    InvalidPlan { file: PathBuf, message: String },

    #[error("plan {file} lists no files - add at least one [[files]] entry")]
    EmptyPlan { file: PathBuf },
}
