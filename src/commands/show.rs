//! `pbxedit show` - list the manifest lines mentioning a display name

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use pbxedit::application::load_manifest;
use pbxedit::infrastructure::resolve_manifest_path;
use pbxedit::{LocalFs, Manifest};

use crate::ui::json::emit_event;

#[derive(Debug, Serialize)]
struct MatchEvent<'a> {
    event: &'static str,
    line: usize,
    text: &'a str,
}

pub fn cmd_show(manifest: &Path, name: &str, json: bool) -> Result<()> {
    let path = resolve_manifest_path(manifest);
    let text = load_manifest(&LocalFs::new(), &path)?;
    let manifest = Manifest::parse(&text);

    for (line, text) in matching_lines(&manifest, name) {
        if json {
            emit_event(&MatchEvent {
                event: "match",
                line,
                text,
            })?;
        } else {
            println!("{}: {}", line, text);
        }
    }
    Ok(())
}

/// 1-based numbers and text of the lines that mention `name`.
fn matching_lines<'a>(manifest: &'a Manifest, name: &str) -> Vec<(usize, &'a str)> {
    if name.is_empty() {
        return Vec::new();
    }
    manifest
        .lines()
        .into_iter()
        .enumerate()
        .filter(|(_, line)| line.contains(name))
        .map(|(i, line)| (i + 1, line.trim_end_matches(['\n', '\r'])))
        .collect()
}
