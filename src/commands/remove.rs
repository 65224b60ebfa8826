//! `pbxedit remove` - strip every mention of display names

use std::path::Path;

use anyhow::Result;

use pbxedit::config::{with_env_overrides, Plan};
use pbxedit::infrastructure::resolve_manifest_path;
use pbxedit::{LocalFs, UnregisterOptions, UnregisterUseCase};

use crate::ui::UiContext;

pub fn cmd_remove(
    manifest: &Path,
    names: &[String],
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let verbosity = with_env_overrides(Plan::default()).verbosity.raised_by(verbose);
    let ui = UiContext::new(json, verbosity);

    let manifest = resolve_manifest_path(manifest);
    let use_case = UnregisterUseCase::new(LocalFs::new());
    let options = UnregisterOptions::new().with_dry_run(dry_run);
    let sink = ui.event_sink("remove", dry_run);
    let report = use_case.execute_with_events(&manifest, names, &options, sink)?;

    if dry_run {
        ui.show_dry_run(&report.manifest, &report.original, &report.updated);
    }
    Ok(())
}
