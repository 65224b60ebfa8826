//! Terminal and NDJSON presentation for the `pbxedit` binary.

pub mod console;
pub mod diff;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;

use std::sync::Arc;

use pbxedit::config::Verbosity;
use pbxedit::domain::ports::RunEventSink;

use console::ConsoleEventSink;
use json::JsonEventSink;
use terminal::{detect_capabilities, TerminalCapabilities};

/// Output settings for one command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub caps: TerminalCapabilities,
}

impl UiContext {
    pub fn new(json: bool, verbosity: Verbosity) -> Self {
        Self {
            json,
            verbosity,
            caps: detect_capabilities(),
        }
    }

    /// Color is off in CI logs even when they claim a TTY.
    pub fn color(&self) -> bool {
        self.caps.supports_color && !self.caps.is_ci
    }

    /// Event sink matching the output mode.
    pub fn event_sink(&self, command: &'static str, dry_run: bool) -> Arc<dyn RunEventSink> {
        if self.json {
            Arc::new(JsonEventSink::stdout(command))
        } else {
            Arc::new(ConsoleEventSink::stdout(
                self.color(),
                self.caps.supports_unicode,
                self.verbosity,
                dry_run,
            ))
        }
    }

    /// Print the pending change of a dry run. Silent in JSON mode.
    pub fn show_dry_run(&self, manifest: &std::path::Path, original: &str, updated: &str) {
        if self.json || original == updated {
            return;
        }
        let name = manifest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| manifest.display().to_string());
        print!(
            "{}",
            diff::render_manifest_diff(&name, original, updated, self.color())
        );
    }
}
