//! Register Use Case
//!
//! Load, register each requested file, persist once.

use std::path::Path;
use std::sync::Arc;

use crate::application::manifest_io;
use crate::domain::entities::Manifest;
use crate::domain::ports::{FileSystem, NoopEventSink, RunEvent, RunEventSink};
use crate::domain::services::{is_registered, register, RegistrationRequest};
use crate::domain::value_objects::{IdentifierSource, RandomIdentifiers, SequentialIdentifiers};
use crate::error::PbxResult;

use super::options::RegisterOptions;
use super::result::{FileOutcome, RegisterReport};

/// Register use case - adds files to a manifest
pub struct RegisterUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> RegisterUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(
        &self,
        manifest_path: &Path,
        requests: &[RegistrationRequest],
        options: &RegisterOptions,
    ) -> PbxResult<RegisterReport> {
        self.execute_with_events(manifest_path, requests, options, Arc::new(NoopEventSink))
    }

    /// Execute, reporting each file's outcome to `event_sink`.
    ///
    /// Per-file outcomes never abort the run. Only a missing or unreadable
    /// manifest, or a failed write, is an error; in every error case the
    /// manifest on disk is left as it was.
    pub fn execute_with_events(
        &self,
        manifest_path: &Path,
        requests: &[RegistrationRequest],
        options: &RegisterOptions,
        event_sink: Arc<dyn RunEventSink>,
    ) -> PbxResult<RegisterReport> {
        match options.seed {
            Some(seed) => self.run(
                manifest_path,
                requests,
                options,
                &event_sink,
                &mut SequentialIdentifiers::new(seed),
            ),
            None => self.run(
                manifest_path,
                requests,
                options,
                &event_sink,
                &mut RandomIdentifiers,
            ),
        }
    }

    fn run(
        &self,
        manifest_path: &Path,
        requests: &[RegistrationRequest],
        options: &RegisterOptions,
        event_sink: &Arc<dyn RunEventSink>,
        ids: &mut impl IdentifierSource,
    ) -> PbxResult<RegisterReport> {
        let original = manifest_io::load(&self.fs, manifest_path)?;
        let mut manifest = Manifest::parse(&original);
        let mut report = RegisterReport::new(manifest_path.to_path_buf());

        event_sink.on_event(RunEvent::Started {
            manifest: manifest_path.to_path_buf(),
            request_count: requests.len(),
        });

        for (index, request) in requests.iter().enumerate() {
            let name = request.display_name();
            if is_registered(&manifest, name, options.duplicate_check) {
                event_sink.on_event(RunEvent::FileSkipped {
                    index,
                    name: name.to_string(),
                });
                report.add(name, FileOutcome::AlreadyRegistered);
                continue;
            }

            let registration = register(&mut manifest, request, options.anchor.as_deref(), ids);
            let minted = (registration.file_ref.clone(), registration.build_file.clone());
            match minted {
                (Some(file_ref), Some(build_file)) if registration.is_complete() => {
                    event_sink.on_event(RunEvent::FileRegistered {
                        index,
                        name: name.to_string(),
                        file_ref,
                        build_file,
                    });
                    report.add(name, FileOutcome::Registered(registration));
                }
                _ => {
                    event_sink.on_event(RunEvent::FilePartial {
                        index,
                        name: name.to_string(),
                        skipped: registration.skipped.clone(),
                    });
                    report.add(name, FileOutcome::Partial(registration));
                }
            }
        }

        report.updated = manifest.serialize();
        report.original = original;

        if report.changed() && !options.dry_run {
            manifest_io::persist(&self.fs, manifest_path, &report.updated)?;
            report.written = true;
        }

        event_sink.on_event(RunEvent::Completed {
            registered: report.registered_count(),
            partial: report.partial_count(),
            skipped: report.skipped_count(),
            removed_lines: 0,
            written: report.written,
        });

        Ok(report)
    }
}
