//! Shared JSON event types.
//!
//! Field names are part of the `--json` contract; add fields, never rename.

use std::path::Path;

use serde::Serialize;

use pbxedit::domain::services::SkippedStep;
use pbxedit::Identifier;

use super::path_string;

#[derive(Debug, Clone, Serialize)]
pub struct StartEvent {
    pub event: &'static str,
    pub command: String,
    pub version: &'static str,
    pub manifest: String,
    pub files: usize,
}

impl StartEvent {
    pub fn new(command: &str, manifest: &Path, files: usize) -> Self {
        Self {
            event: "start",
            command: command.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            manifest: path_string(manifest),
            files,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedStepJson {
    pub step: String,
    pub reason: String,
}

/// One requested file, once its outcome is known.
#[derive(Debug, Clone, Serialize)]
pub struct FileEvent {
    pub event: &'static str,
    pub index: usize,
    pub name: String,
    /// `registered`, `partial`, `skipped` or `removed`
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_file: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedStepJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
}

impl FileEvent {
    fn base(index: usize, name: String, status: &'static str) -> Self {
        Self {
            event: "file",
            index,
            name,
            status,
            file_ref: None,
            build_file: None,
            skipped: Vec::new(),
            lines: None,
        }
    }

    pub fn registered(
        index: usize,
        name: String,
        file_ref: &Identifier,
        build_file: &Identifier,
    ) -> Self {
        Self {
            file_ref: Some(file_ref.to_string()),
            build_file: Some(build_file.to_string()),
            ..Self::base(index, name, "registered")
        }
    }

    pub fn partial(index: usize, name: String, skipped: &[SkippedStep]) -> Self {
        Self {
            skipped: skipped
                .iter()
                .map(|s| SkippedStepJson {
                    step: s.step.to_string(),
                    reason: s.reason.to_string(),
                })
                .collect(),
            ..Self::base(index, name, "partial")
        }
    }

    pub fn already_registered(index: usize, name: String) -> Self {
        Self::base(index, name, "skipped")
    }

    pub fn removed(index: usize, name: String, lines: usize) -> Self {
        Self {
            lines: Some(lines),
            ..Self::base(index, name, "removed")
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent {
    pub event: &'static str,
    pub command: String,
    pub success: bool,
    pub registered: usize,
    pub partial: usize,
    pub skipped: usize,
    pub removed_lines: usize,
    pub written: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(command: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command: command.map(str::to_string),
            message: message.into(),
        }
    }
}
