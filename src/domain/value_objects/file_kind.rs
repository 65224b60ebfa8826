//! File kind value object - the `lastKnownFileType` classifier

use std::path::Path;

/// Classifier written into a file-reference record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Swift,
    ObjC,
    ObjCpp,
    C,
    Cpp,
    Header,
    Metal,
    /// Anything without a dedicated classifier
    Text,
}

impl FileKind {
    /// Classify by file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "swift" => FileKind::Swift,
            "m" => FileKind::ObjC,
            "mm" => FileKind::ObjCpp,
            "c" => FileKind::C,
            "cc" | "cpp" | "cxx" => FileKind::Cpp,
            "h" | "hpp" => FileKind::Header,
            "metal" => FileKind::Metal,
            _ => FileKind::Text,
        }
    }

    pub fn last_known_file_type(&self) -> &'static str {
        match self {
            FileKind::Swift => "sourcecode.swift",
            FileKind::ObjC => "sourcecode.c.objc",
            FileKind::ObjCpp => "sourcecode.cpp.objcpp",
            FileKind::C => "sourcecode.c.c",
            FileKind::Cpp => "sourcecode.cpp.cpp",
            FileKind::Header => "sourcecode.c.h",
            FileKind::Metal => "sourcecode.metal",
            FileKind::Text => "text",
        }
    }
}
