//! Human-readable run progress.
//!
//! One line per requested file, then a summary line:
//!
//! ```text
//! ✓ Foo.swift
//! ○ Bar.swift (already registered)
//! ⚠ Baz.swift (partial)
//!   ↳ group membership skipped: no group 'Services'
//! 1 registered, 1 partial, 1 already registered
//! ```

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use pbxedit::config::Verbosity;
use pbxedit::domain::ports::{RunEvent, RunEventSink};

use super::theme::{colors, Icon};

pub struct ConsoleEventSink<W: Write + Send = io::Stdout> {
    color: bool,
    unicode: bool,
    verbosity: Verbosity,
    dry_run: bool,
    out: Mutex<W>,
}

impl ConsoleEventSink {
    pub fn stdout(color: bool, unicode: bool, verbosity: Verbosity, dry_run: bool) -> Self {
        Self::new(io::stdout(), color, unicode, verbosity, dry_run)
    }
}

impl<W: Write + Send> ConsoleEventSink<W> {
    pub fn new(out: W, color: bool, unicode: bool, verbosity: Verbosity, dry_run: bool) -> Self {
        Self {
            color,
            unicode,
            verbosity,
            dry_run,
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn line(&self, text: String) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        let _ = writeln!(out, "{}", text);
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn dim(&self, text: String) -> String {
        if self.color {
            text.with(colors::DIM).to_string()
        } else {
            text
        }
    }

    fn render(&self, event: RunEvent) -> Vec<String> {
        let verbose = self.verbosity.is_verbose();
        match event {
            RunEvent::Started {
                manifest,
                request_count,
            } => {
                if verbose {
                    vec![self.dim(format!(
                        "{} ({} file{})",
                        manifest.display(),
                        request_count,
                        if request_count == 1 { "" } else { "s" }
                    ))]
                } else {
                    Vec::new()
                }
            }
            RunEvent::FileRegistered {
                name,
                file_ref,
                build_file,
                ..
            } => {
                let mut lines = vec![format!("{} {}", self.icon(Icon::Success), name)];
                if verbose {
                    lines.push(self.dim(format!(
                        "  {} file reference {}, build file {}",
                        Icon::Arrow.render(self.unicode),
                        file_ref,
                        build_file
                    )));
                }
                lines
            }
            RunEvent::FilePartial { name, skipped, .. } => {
                let mut lines = vec![format!("{} {} (partial)", self.icon(Icon::Warning), name)];
                for step in skipped {
                    lines.push(format!(
                        "  {} {} skipped: {}",
                        Icon::Arrow.render(self.unicode),
                        step.step,
                        step.reason
                    ));
                }
                lines
            }
            RunEvent::FileSkipped { name, .. } => vec![format!(
                "{} {} {}",
                self.icon(Icon::Pending),
                name,
                self.dim("(already registered)".to_string())
            )],
            RunEvent::FileRemoved { name, lines, .. } => {
                if lines == 0 {
                    vec![format!(
                        "{} {} {}",
                        self.icon(Icon::Pending),
                        name,
                        self.dim("(not mentioned)".to_string())
                    )]
                } else {
                    vec![format!(
                        "{} {} ({} line{} removed)",
                        self.icon(Icon::Trash),
                        name,
                        lines,
                        if lines == 1 { "" } else { "s" }
                    )]
                }
            }
            RunEvent::Completed {
                registered,
                partial,
                skipped,
                removed_lines,
                written,
            } => {
                if self.verbosity == Verbosity::Quiet {
                    return Vec::new();
                }
                let mut summary = if registered + partial + skipped > 0 {
                    format!(
                        "{} registered, {} partial, {} already registered",
                        registered, partial, skipped
                    )
                } else {
                    format!("{} lines removed", removed_lines)
                };
                if self.dry_run {
                    summary.push_str(" (dry run, nothing written)");
                } else if !written {
                    summary.push_str(" (manifest unchanged)");
                }
                vec![summary]
            }
        }
    }
}

impl<W: Write + Send> RunEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: RunEvent) {
        for line in self.render(event) {
            self.line(line);
        }
    }
}
