//! Plan loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Identifier;
use crate::error::{PbxError, PbxResult};

use super::types::{Plan, Verbosity};

/// Non-fatal plan warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a plan and collect non-fatal warnings (e.g. unknown keys).
///
/// Fails when the file is missing, is not valid TOML, names a malformed
/// `target_id`, or lists no files.
pub fn load_with_warnings(path: &Path) -> PbxResult<(Plan, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PbxError::MissingPlan {
            path: path.to_path_buf(),
        },
        _ => PbxError::Io(e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let plan: Plan = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PbxError::InvalidPlan {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&plan, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((plan, warnings))
}

fn validate(plan: &Plan, path: &Path) -> PbxResult<()> {
    if plan.files.is_empty() {
        return Err(PbxError::EmptyPlan {
            file: path.to_path_buf(),
        });
    }
    if let Some(bad) = plan.target_ids().find(|id| Identifier::parse(id).is_none()) {
        return Err(PbxError::InvalidPlan {
            file: path.to_path_buf(),
            message: format!("target_id '{}' is not an object identifier", bad),
        });
    }
    Ok(())
}

/// Apply environment variable overrides (PBXEDIT_* prefix)
pub fn with_env_overrides(plan: Plan) -> Plan {
    apply_overrides(plan, |key| std::env::var(key).ok())
}

/// Apply overrides from `lookup`, which maps a variable name to its value.
pub(crate) fn apply_overrides(mut plan: Plan, lookup: impl Fn(&str) -> Option<String>) -> Plan {
    if let Some(target) = lookup("PBXEDIT_TARGET") {
        plan.target = Some(target);
    }

    if let Some(group) = lookup("PBXEDIT_GROUP") {
        plan.group = Some(group);
    }

    if let Some(anchor) = lookup("PBXEDIT_ANCHOR") {
        plan.anchor = Some(anchor);
    }

    // Unknown values keep the configured strategy
    if let Some(check) = lookup("PBXEDIT_DUPLICATE_CHECK") {
        if let Ok(check) = check.parse() {
            plan.duplicate_check = check;
        }
    }

    if let Some(verbosity) = lookup("PBXEDIT_VERBOSITY") {
        plan.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    plan
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "manifest",
        "target",
        "target_id",
        "group",
        "anchor",
        "duplicate_check",
        "verbosity",
        "files",
        "path",
        "name",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
