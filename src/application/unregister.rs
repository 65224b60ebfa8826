//! Unregister Use Case
//!
//! Removes every line mentioning each given name, then persists once.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::manifest_io;
use crate::domain::entities::Manifest;
use crate::domain::ports::{FileSystem, NoopEventSink, RunEvent, RunEventSink};
use crate::domain::services::unregister;
use crate::error::PbxResult;

/// Options for an unregister run
#[derive(Debug, Clone, Default)]
pub struct UnregisterOptions {
    /// Whether this is a dry run (no write)
    pub dry_run: bool,
}

impl UnregisterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of an unregister run
#[derive(Debug, Clone, Default)]
pub struct UnregisterReport {
    pub manifest: PathBuf,
    /// Each requested name with the number of lines removed for it
    pub removed: Vec<(String, usize)>,
    pub original: String,
    pub updated: String,
    pub written: bool,
}

impl UnregisterReport {
    pub fn total_removed(&self) -> usize {
        self.removed.iter().map(|(_, lines)| lines).sum()
    }

    pub fn changed(&self) -> bool {
        self.original != self.updated
    }
}

/// Unregister use case - removes files from a manifest
pub struct UnregisterUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> UnregisterUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(
        &self,
        manifest_path: &Path,
        names: &[String],
        options: &UnregisterOptions,
    ) -> PbxResult<UnregisterReport> {
        self.execute_with_events(manifest_path, names, options, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        manifest_path: &Path,
        names: &[String],
        options: &UnregisterOptions,
        event_sink: Arc<dyn RunEventSink>,
    ) -> PbxResult<UnregisterReport> {
        let original = manifest_io::load(&self.fs, manifest_path)?;
        let mut manifest = Manifest::parse(&original);
        let mut report = UnregisterReport {
            manifest: manifest_path.to_path_buf(),
            ..UnregisterReport::default()
        };

        event_sink.on_event(RunEvent::Started {
            manifest: manifest_path.to_path_buf(),
            request_count: names.len(),
        });

        for (index, name) in names.iter().enumerate() {
            let lines = unregister(&mut manifest, name);
            event_sink.on_event(RunEvent::FileRemoved {
                index,
                name: name.clone(),
                lines,
            });
            report.removed.push((name.clone(), lines));
        }

        report.updated = manifest.serialize();
        report.original = original;

        if report.changed() && !options.dry_run {
            manifest_io::persist(&self.fs, manifest_path, &report.updated)?;
            report.written = true;
        }

        event_sink.on_event(RunEvent::Completed {
            registered: 0,
            partial: 0,
            skipped: 0,
            removed_lines: report.total_removed(),
            written: report.written,
        });

        Ok(report)
    }
}
