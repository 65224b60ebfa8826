//! Register result types

use std::path::PathBuf;

use crate::domain::services::Registration;

/// What happened to one requested file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// All four records were added
    Registered(Registration),
    /// Some records were added; the rest are listed in `skipped`
    Partial(Registration),
    /// The display name was already registered; nothing was added
    AlreadyRegistered,
}

/// A requested file and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub name: String,
    pub outcome: FileOutcome,
}

/// Result of a register run
#[derive(Debug, Clone, Default)]
pub struct RegisterReport {
    /// Manifest that was edited
    pub manifest: PathBuf,
    pub files: Vec<FileReport>,
    /// Manifest text as loaded
    pub original: String,
    /// Manifest text after all edits
    pub updated: String,
    /// Whether the manifest was written back
    pub written: bool,
}

impl RegisterReport {
    pub fn new(manifest: PathBuf) -> Self {
        Self {
            manifest,
            ..Self::default()
        }
    }

    pub fn add(&mut self, name: &str, outcome: FileOutcome) {
        self.files.push(FileReport {
            name: name.to_string(),
            outcome,
        });
    }

    pub fn registered_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Registered(_)))
    }

    pub fn partial_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Partial(_)))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::AlreadyRegistered))
    }

    /// Whether the edits changed the manifest text
    pub fn changed(&self) -> bool {
        self.original != self.updated
    }

    /// Every file is either registered in full or was already registered
    pub fn is_complete(&self) -> bool {
        self.partial_count() == 0
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}
