//! JSON output for `--json` runs.
//!
//! Every event is one JSON object per line (NDJSON) on stdout:
//!
//! ```ignore
//! emit_event(&StartEvent::new("add", manifest, 2))?;
//! emit_event(&CompleteEvent::new("add", &summary))?;
//! ```

pub mod events;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;

use pbxedit::domain::ports::{RunEvent, RunEventSink};

use events::{CompleteEvent, FileEvent, StartEvent};

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event as NDJSON to any writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Event sink that writes run events as NDJSON.
pub struct JsonEventSink<W: Write + Send = io::Stdout> {
    command: &'static str,
    out: Mutex<W>,
}

impl JsonEventSink {
    pub fn stdout(command: &'static str) -> Self {
        Self::new(command, io::stdout())
    }
}

impl<W: Write + Send> JsonEventSink<W> {
    pub fn new(command: &'static str, out: W) -> Self {
        Self {
            command,
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

    fn write<T: Serialize>(&self, event: &T) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // A closed stdout must not abort the run
        let _ = write_typed_event(&mut *out, event);
    }
}

impl<W: Write + Send> RunEventSink for JsonEventSink<W> {
    fn on_event(&self, event: RunEvent) {
        match event {
            RunEvent::Started {
                manifest,
                request_count,
            } => self.write(&StartEvent::new(self.command, &manifest, request_count)),
            RunEvent::FileRegistered {
                index,
                name,
                file_ref,
                build_file,
            } => self.write(&FileEvent::registered(index, name, &file_ref, &build_file)),
            RunEvent::FilePartial {
                index,
                name,
                skipped,
            } => self.write(&FileEvent::partial(index, name, &skipped)),
            RunEvent::FileSkipped { index, name } => {
                self.write(&FileEvent::already_registered(index, name))
            }
            RunEvent::FileRemoved { index, name, lines } => {
                self.write(&FileEvent::removed(index, name, lines))
            }
            RunEvent::Completed {
                registered,
                partial,
                skipped,
                removed_lines,
                written,
            } => self.write(&CompleteEvent {
                event: "complete",
                command: self.command.to_string(),
                success: partial == 0,
                registered,
                partial,
                skipped,
                removed_lines,
                written,
            }),
        }
    }
}

/// Display form of a manifest path inside events.
pub(crate) fn path_string(path: &Path) -> String {
    path.display().to_string()
}
