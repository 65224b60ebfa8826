//! Command handlers for the `pbxedit` binary.

pub mod add;
pub mod apply;
pub mod remove;
pub mod show;

use std::path::Path;

use anyhow::Result;

use pbxedit::domain::services::RegistrationRequest;
use pbxedit::{LocalFs, RegisterOptions, RegisterUseCase};

use crate::ui::UiContext;

/// Run one registration pass and report it through `ui`.
pub(crate) fn run_register(
    ui: &UiContext,
    command: &'static str,
    manifest: &Path,
    requests: &[RegistrationRequest],
    options: &RegisterOptions,
) -> Result<()> {
    let use_case = RegisterUseCase::new(LocalFs::new());
    let sink = ui.event_sink(command, options.dry_run);
    let report = use_case.execute_with_events(manifest, requests, options, sink)?;

    if options.dry_run {
        ui.show_dry_run(&report.manifest, &report.original, &report.updated);
    }
    Ok(())
}
