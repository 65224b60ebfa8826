//! Duplicate detection
//!
//! Decides whether a display name is already registered, so the inserter can
//! skip it and repeated runs stay idempotent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Manifest;
use crate::domain::value_objects::SectionKind;

/// Strategy for the already-registered check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateCheck {
    /// Exact lookup of file-reference and build-file entries by display name
    #[default]
    Indexed,
    /// The display name occurs anywhere in the manifest text
    #[serde(rename = "text", alias = "textual")]
    Textual,
}

impl FromStr for DuplicateCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indexed" | "index" => Ok(DuplicateCheck::Indexed),
            "text" | "textual" => Ok(DuplicateCheck::Textual),
            other => Err(format!(
                "unknown duplicate check '{}', expected 'indexed' or 'text'",
                other
            )),
        }
    }
}

impl fmt::Display for DuplicateCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateCheck::Indexed => write!(f, "indexed"),
            DuplicateCheck::Textual => write!(f, "text"),
        }
    }
}

/// Whether `display_name` is already registered in `manifest`.
///
/// The indexed check matches whole names only, so `Foo.x` is not mistaken
/// for `MyFoo.x` or `Foo.xib`.
pub fn is_registered(manifest: &Manifest, display_name: &str, check: DuplicateCheck) -> bool {
    match check {
        DuplicateCheck::Indexed => {
            manifest.is_indexed(&SectionKind::FileReference, display_name)
                || manifest.is_indexed(&SectionKind::BuildFile, display_name)
        }
        DuplicateCheck::Textual => manifest.contains_text(display_name),
    }
}
