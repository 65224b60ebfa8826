//! `pbxedit apply` - register every file listed in a plan

use std::path::Path;

use anyhow::Result;

use pbxedit::config::{load_with_warnings, with_env_overrides};
use pbxedit::infrastructure::resolve_manifest_path;
use pbxedit::PbxError;

use crate::ui::output::print_config_warnings;
use crate::ui::UiContext;

pub fn cmd_apply(
    plan_file: &Path,
    dry_run: bool,
    seed: Option<u64>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let (plan, warnings) = load_with_warnings(plan_file)?;
    let plan = with_env_overrides(plan);
    let ui = UiContext::new(json, plan.verbosity.raised_by(verbose));

    if !json {
        print_config_warnings(plan_file, &warnings, ui.caps.supports_unicode);
    }

    let manifest = plan
        .manifest_path(plan_file)
        .ok_or_else(|| PbxError::InvalidPlan {
            file: plan_file.to_path_buf(),
            message: "missing `manifest` key".to_string(),
        })?;
    let manifest = resolve_manifest_path(&manifest);

    let options = plan
        .register_options()
        .with_dry_run(dry_run)
        .with_seed(seed);
    super::run_register(&ui, "apply", &manifest, &plan.requests(), &options)
}
