//! Plan file types
//!
//! A plan (`pbxedit.toml`) lists the files to register in one run, with
//! run-wide defaults that each `[[files]]` entry may override:
//!
//! ```toml
//! manifest = "App.xcodeproj"
//! target = "App"
//! group = "Services"
//! anchor = "ContentView.swift"
//! duplicate_check = "indexed"
//!
//! [[files]]
//! path = "App/Services/Foo.swift"
//!
//! [[files]]
//! path = "AppTests/FooTests.swift"
//! target = "AppTests"
//! group = "AppTests"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::RegisterOptions;
use crate::domain::services::{DuplicateCheck, RegistrationRequest, TargetSelector};
use crate::domain::value_objects::Identifier;

/// Default plan file name
pub const PLAN_FILE_NAME: &str = "pbxedit.toml";

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the level by the number of `-v` flags.
    pub fn raised_by(self, count: u8) -> Self {
        let level = match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
            Verbosity::Debug => 3,
        } + count;
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    pub fn is_verbose(self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::Debug)
    }
}

/// One `[[files]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Source path; its file name becomes the reference's `path`
    pub path: PathBuf,
    /// Display name, when it differs from the file name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: None,
            target_id: None,
            group: None,
        }
    }
}

/// A registration plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    /// Manifest file or `.xcodeproj` directory, relative to the plan file
    pub manifest: Option<PathBuf>,
    /// Native target name used when an entry names none
    pub target: Option<String>,
    /// Target or sources phase identifier; wins over `target`
    pub target_id: Option<String>,
    pub group: Option<String>,
    /// File whose group receives files when the named group is missing
    pub anchor: Option<String>,
    pub duplicate_check: DuplicateCheck,
    pub verbosity: Verbosity,
    pub files: Vec<FileEntry>,
}

impl Plan {
    /// Manifest path resolved against the directory holding `plan_file`.
    pub fn manifest_path(&self, plan_file: &Path) -> Option<PathBuf> {
        let manifest = self.manifest.as_ref()?;
        if manifest.is_absolute() || manifest.starts_with("~") {
            return Some(manifest.clone());
        }
        Some(match plan_file.parent() {
            Some(dir) => dir.join(manifest),
            None => manifest.clone(),
        })
    }

    /// One request per entry, with run-wide defaults filled in.
    ///
    /// Entry-level target settings replace both run-wide ones, so an entry
    /// naming `target` is not overridden by a run-wide `target_id`.
    pub fn requests(&self) -> Vec<RegistrationRequest> {
        self.files
            .iter()
            .map(|entry| {
                let (target, target_id) = if entry.target.is_some() || entry.target_id.is_some() {
                    (entry.target.clone(), entry.target_id.as_deref())
                } else {
                    (self.target.clone(), self.target_id.as_deref())
                };
                let selector =
                    TargetSelector::from_parts(target, target_id.and_then(Identifier::parse));

                let mut request = RegistrationRequest::new(&entry.path).with_target(selector);
                if let Some(name) = &entry.name {
                    request = request.with_name(name.clone());
                }
                if let Some(group) = entry.group.as_ref().or(self.group.as_ref()) {
                    request = request.with_group(group.clone());
                }
                request
            })
            .collect()
    }

    pub fn register_options(&self) -> RegisterOptions {
        RegisterOptions::new()
            .with_anchor(self.anchor.clone())
            .with_duplicate_check(self.duplicate_check)
    }

    /// Every `target_id` in the plan, run-wide first.
    pub(crate) fn target_ids(&self) -> impl Iterator<Item = &str> {
        self.target_id
            .as_deref()
            .into_iter()
            .chain(self.files.iter().filter_map(|f| f.target_id.as_deref()))
    }
}
