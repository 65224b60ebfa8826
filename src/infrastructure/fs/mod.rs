//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus resolution of the
//! manifest path a user passes on the command line.

mod local;

use std::path::{Path, PathBuf};

pub use local::{expand_home, LocalFs};

/// File name of the manifest inside a `.xcodeproj` bundle
pub const MANIFEST_FILE_NAME: &str = "project.pbxproj";

/// Resolve a user-supplied manifest path.
///
/// Expands `~`, and maps a project bundle directory (`App.xcodeproj`) to the
/// manifest file inside it. Other paths are returned unchanged; whether they
/// exist is checked by the caller.
pub fn resolve_manifest_path(path: &Path) -> PathBuf {
    let path = expand_home(path);
    if path.is_dir() {
        path.join(MANIFEST_FILE_NAME)
    } else {
        path
    }
}
