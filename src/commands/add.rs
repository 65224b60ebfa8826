//! `pbxedit add` - register files given on the command line

use std::path::PathBuf;

use anyhow::{bail, Result};

use pbxedit::config::{with_env_overrides, FileEntry, Plan};
use pbxedit::domain::services::DuplicateCheck;
use pbxedit::infrastructure::resolve_manifest_path;
use pbxedit::Identifier;

use crate::ui::UiContext;

#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub manifest: PathBuf,
    pub files: Vec<PathBuf>,
    pub name: Option<String>,
    pub target: Option<String>,
    pub target_id: Option<Identifier>,
    pub group: Option<String>,
    pub anchor: Option<String>,
    pub text_duplicates: bool,
    pub dry_run: bool,
    pub seed: Option<u64>,
}

pub fn cmd_add(args: AddArgs, json: bool, verbose: u8) -> Result<()> {
    let plan = build_plan(&args, with_env_overrides(Plan::default()))?;
    let ui = UiContext::new(json, plan.verbosity.raised_by(verbose));

    let manifest = resolve_manifest_path(&args.manifest);
    let options = plan
        .register_options()
        .with_dry_run(args.dry_run)
        .with_seed(args.seed);
    super::run_register(&ui, "add", &manifest, &plan.requests(), &options)
}

/// Layer command-line flags over `base` (defaults plus environment).
fn build_plan(args: &AddArgs, base: Plan) -> Result<Plan> {
    if args.name.is_some() && args.files.len() > 1 {
        bail!("--name applies to a single file, got {}", args.files.len());
    }

    let mut plan = base;
    if let Some(id) = &args.target_id {
        plan.target = None;
        plan.target_id = Some(id.to_string());
    } else if let Some(target) = &args.target {
        plan.target = Some(target.clone());
        plan.target_id = None;
    }
    if let Some(group) = &args.group {
        plan.group = Some(group.clone());
    }
    if let Some(anchor) = &args.anchor {
        plan.anchor = Some(anchor.clone());
    }
    if args.text_duplicates {
        plan.duplicate_check = DuplicateCheck::Textual;
    }

    plan.files = args
        .files
        .iter()
        .map(|path| FileEntry {
            name: args.name.clone(),
            ..FileEntry::new(path)
        })
        .collect();
    Ok(plan)
}
