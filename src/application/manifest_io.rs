//! Load and persist helpers shared by the use cases.

use std::path::Path;

use crate::domain::ports::{FileSystem, FsError};
use crate::error::{PbxError, PbxResult};

/// Read the manifest text; a missing file aborts the run.
pub fn load<FS: FileSystem>(fs: &FS, path: &Path) -> PbxResult<String> {
    if !fs.exists(path) {
        return Err(PbxError::MissingManifest {
            path: path.to_path_buf(),
        });
    }
    fs.read(path).map_err(|source| match source {
        FsError::NotFound(_) => PbxError::MissingManifest {
            path: path.to_path_buf(),
        },
        source => PbxError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub(crate) fn persist<FS: FileSystem>(fs: &FS, path: &Path, text: &str) -> PbxResult<()> {
    fs.write(path, text).map_err(|source| PbxError::Write {
        path: path.to_path_buf(),
        source,
    })
}
