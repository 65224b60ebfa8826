use pbxedit::PbxError;

use super::json::{emit_event, events::ErrorEvent};
use super::terminal::detect_capabilities;
use super::theme::Icon;

pub fn print_error(err: &anyhow::Error, json: bool, command: Option<&str>) {
    if json {
        let _ = emit_event(&ErrorEvent::new(command, err.to_string()));
        return;
    }

    let caps = detect_capabilities();
    eprint!("{}", format_error(err, caps.supports_color, caps.supports_unicode));
}

fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    );
    if let Some(fix) = err.downcast_ref::<PbxError>().and_then(fix_for) {
        out.push_str(&format!("  {} {}\n", Icon::Arrow.render(supports_unicode), fix));
    }
    out
}

fn fix_for(err: &PbxError) -> Option<&'static str> {
    match err {
        PbxError::MissingManifest { .. } => {
            Some("Pass the .xcodeproj directory or the project.pbxproj inside it.")
        }
        PbxError::MissingPlan { .. } => Some("Create pbxedit.toml or pass --plan <FILE>."),
        PbxError::EmptyPlan { .. } => Some("Add a [[files]] entry with a `path` key."),
        _ => None,
    }
}
