//! Reference remover
//!
//! Removes every line mentioning a display name, wherever it appears. This is
//! a cleanup tool, not the inverse of [`register`](super::inserter::register):
//! entries that merely mention the name go too.

use crate::domain::entities::Manifest;

/// Remove every line of `manifest` that contains `display_name`.
///
/// Returns the number of lines removed. An empty name removes nothing.
pub fn unregister(manifest: &mut Manifest, display_name: &str) -> usize {
    if display_name.is_empty() {
        return 0;
    }
    manifest.remove_lines_containing(display_name)
}
