use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use super::theme;

/// Context lines kept around each change.
const CONTEXT: usize = 2;

/// Render the pending manifest change as numbered hunks.
///
/// Manifests run to thousands of lines, so unchanged stretches are collapsed
/// and only `CONTEXT` lines around each edit are shown.
pub fn render_manifest_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let width = old.lines().count().max(new.lines().count()).max(1).to_string().len();

    let mut out = String::new();
    push_line(&mut out, &format!("--- a/{}", path), None, supports_color);
    push_line(&mut out, &format!("+++ b/{}", path), None, supports_color);

    for (i, group) in diff.grouped_ops(CONTEXT).iter().enumerate() {
        if i > 0 {
            let gap = format!("{:>w$}", "...", w = width * 2 + 3);
            push_line(&mut out, &gap, Some(ChangeTag::Equal), supports_color);
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let (old_no, new_no, sign) = match change.tag() {
                    ChangeTag::Delete => (change.old_index(), None, "-"),
                    ChangeTag::Insert => (None, change.new_index(), "+"),
                    ChangeTag::Equal => (change.old_index(), change.new_index(), " "),
                };
                let column = |n: Option<usize>| {
                    n.map(|i| format!("{:>width$}", i + 1, width = width))
                        .unwrap_or_else(|| " ".repeat(width))
                };
                let value = change.value().trim_end_matches(['\n', '\r']);
                let line = format!("{} {} {} {}", column(old_no), column(new_no), sign, value);
                push_line(&mut out, &line, Some(change.tag()), supports_color);
            }
        }
    }

    out
}

fn push_line(out: &mut String, s: &str, tag: Option<ChangeTag>, supports_color: bool) {
    if !supports_color {
        out.push_str(s);
    } else {
        let color = match tag {
            None => theme::colors::INFO,
            Some(ChangeTag::Delete) => theme::colors::ERROR,
            Some(ChangeTag::Insert) => theme::colors::SUCCESS,
            Some(ChangeTag::Equal) => theme::colors::DIM,
        };
        out.push_str(&s.with(color).to_string());
    }
    out.push('\n');
}
