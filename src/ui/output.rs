use std::path::Path;

use pbxedit::config::ConfigWarning;

use super::theme::Icon;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], unicode: bool) {
    eprint!("{}", format_config_warnings(path, warnings, unicode));
}

fn format_config_warnings(path: &Path, warnings: &[ConfigWarning], unicode: bool) -> String {
    let icon = Icon::Warning.render(unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown plan key '{}' in {}:{}\n",
                icon,
                w.key,
                path.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown plan key '{}' in {}\n",
                icon,
                w.key,
                path.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}
