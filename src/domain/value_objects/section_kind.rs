//! Section kind value object - names the record type a section holds

/// Kind of a `/* Begin <Kind> section */` region
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    /// `PBXBuildFile` - membership of a file in a build phase
    BuildFile,
    /// `PBXFileReference` - a file on disk
    FileReference,
    /// `PBXGroup` - a folder in the project navigator
    Group,
    /// `PBXNativeTarget` - a build unit
    NativeTarget,
    /// `PBXSourcesBuildPhase` - the compile phase of a target
    SourcesBuildPhase,
    /// Any other section, kept verbatim
    Other(String),
}

impl SectionKind {
    /// Sections the engine reads or edits
    pub const KNOWN: [SectionKind; 5] = [
        SectionKind::BuildFile,
        SectionKind::FileReference,
        SectionKind::Group,
        SectionKind::NativeTarget,
        SectionKind::SourcesBuildPhase,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "PBXBuildFile" => SectionKind::BuildFile,
            "PBXFileReference" => SectionKind::FileReference,
            "PBXGroup" => SectionKind::Group,
            "PBXNativeTarget" => SectionKind::NativeTarget,
            "PBXSourcesBuildPhase" => SectionKind::SourcesBuildPhase,
            other => SectionKind::Other(other.to_string()),
        }
    }

    /// The `isa` / marker name of this kind
    pub fn name(&self) -> &str {
        match self {
            SectionKind::BuildFile => "PBXBuildFile",
            SectionKind::FileReference => "PBXFileReference",
            SectionKind::Group => "PBXGroup",
            SectionKind::NativeTarget => "PBXNativeTarget",
            SectionKind::SourcesBuildPhase => "PBXSourcesBuildPhase",
            SectionKind::Other(name) => name,
        }
    }

    pub fn begin_marker(&self) -> String {
        format!("/* Begin {} section */", self.name())
    }

    pub fn end_marker(&self) -> String {
        format!("/* End {} section */", self.name())
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
