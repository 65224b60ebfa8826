//! Run Event Port
//!
//! Observable interface for register and unregister runs.
//! Drives console progress lines and the NDJSON event stream.

use std::path::PathBuf;

use crate::domain::services::SkippedStep;
use crate::domain::value_objects::Identifier;

/// Event emitted during a run
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// Manifest loaded
    Started {
        manifest: PathBuf,
        request_count: usize,
    },

    /// All four records were added
    FileRegistered {
        index: usize,
        name: String,
        file_ref: Identifier,
        build_file: Identifier,
    },

    /// Some records were added, some were skipped
    FilePartial {
        index: usize,
        name: String,
        skipped: Vec<SkippedStep>,
    },

    /// The name is already registered; nothing was added
    FileSkipped { index: usize, name: String },

    /// Lines mentioning a name were removed
    FileRemoved {
        index: usize,
        name: String,
        lines: usize,
    },

    /// Run finished
    Completed {
        registered: usize,
        partial: usize,
        skipped: usize,
        removed_lines: usize,
        written: bool,
    },
}

/// Trait for receiving run events
///
/// Implementations:
/// - ConsoleEventSink: one line per file
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait RunEventSink: Send + Sync {
    fn on_event(&self, event: RunEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}
