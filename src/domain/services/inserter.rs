//! Entry inserter
//!
//! Adds the four coupled records that register one source file:
//! a file reference, a build file, a group membership and a target
//! membership. Every step works on the same in-memory manifest, so later
//! lookups in a run see earlier edits.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Field, Manifest, Object, ObjectHandle};
use crate::domain::value_objects::{FileKind, Identifier, IdentifierSource, SectionKind};

use super::locator::{self, GroupResolution, TargetSelector};

/// One file to register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    source_path: PathBuf,
    display_name: String,
    target: Option<TargetSelector>,
    group: Option<String>,
}

impl RegistrationRequest {
    /// Request named after the last component of `source_path`.
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        let source_path = source_path.into();
        let display_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_path.to_string_lossy().into_owned());
        Self {
            source_path,
            display_name,
            target: None,
            group: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_target(mut self, target: TargetSelector) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn target(&self) -> Option<&TargetSelector> {
        self.target.as_ref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// `path` value written to the file reference
    fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.display_name.clone())
    }
}

/// One of the four coupled edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    FileReference,
    BuildFile,
    GroupMembership,
    TargetMembership,
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationStep::FileReference => write!(f, "file reference"),
            RegistrationStep::BuildFile => write!(f, "build file"),
            RegistrationStep::GroupMembership => write!(f, "group membership"),
            RegistrationStep::TargetMembership => write!(f, "target membership"),
        }
    }
}

/// Why a step was not performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The section the entry belongs in does not exist
    MissingSection(SectionKind),
    /// Neither the requested group nor the anchor file was found
    MissingGroup {
        group: Option<String>,
        anchor: Option<String>,
    },
    /// No sources phase matched the selector
    MissingTarget(TargetSelector),
    /// The container exists but has no such reference list
    MissingList(&'static str),
    /// An earlier step this one references was skipped
    DependsOn(RegistrationStep),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSection(kind) => write!(f, "no {} section", kind),
            SkipReason::MissingGroup { group, anchor } => match (group, anchor) {
                (Some(group), Some(anchor)) => {
                    write!(f, "no group '{}' and no group holding '{}'", group, anchor)
                }
                (Some(group), None) => write!(f, "no group '{}'", group),
                (None, Some(anchor)) => write!(f, "no group holding '{}'", anchor),
                (None, None) => write!(f, "no group or anchor given"),
            },
            SkipReason::MissingTarget(selector) => write!(f, "{} not found", selector),
            SkipReason::MissingList(key) => write!(f, "container has no '{}' list", key),
            SkipReason::DependsOn(step) => write!(f, "{} was not created", step),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedStep {
    pub step: RegistrationStep,
    pub reason: SkipReason,
}

/// How the group membership was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupVia {
    Named,
    Anchor,
}

/// Outcome of registering one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub display_name: String,
    pub file_ref: Option<Identifier>,
    pub build_file: Option<Identifier>,
    /// Identifier of the group that received the file reference
    pub group: Option<Identifier>,
    pub group_via: Option<GroupVia>,
    /// Identifier of the sources phase that received the build file
    pub target_phase: Option<Identifier>,
    pub skipped: Vec<SkippedStep>,
}

impl Registration {
    fn new(display_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            file_ref: None,
            build_file: None,
            group: None,
            group_via: None,
            target_phase: None,
            skipped: Vec::new(),
        }
    }

    /// All four edits were made.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Whether any line was added.
    pub fn changed(&self) -> bool {
        self.file_ref.is_some() || self.build_file.is_some()
    }

    fn skip(&mut self, step: RegistrationStep, reason: SkipReason) {
        self.skipped.push(SkippedStep { step, reason });
    }
}

/// Register `request` in `manifest`.
///
/// `anchor` names a file whose group receives the new file reference when the
/// requested group does not exist. Steps that cannot be resolved are recorded
/// in [`Registration::skipped`]; steps that would reference a skipped entry
/// are skipped too, so no dangling identifier is ever written.
pub fn register(
    manifest: &mut Manifest,
    request: &RegistrationRequest,
    anchor: Option<&str>,
    ids: &mut impl IdentifierSource,
) -> Registration {
    let name = request.display_name();
    let mut result = Registration::new(name);

    // Containers are resolved before any insert; inserting shifts handles.
    let group = locator::find_container_for(manifest, request.group(), anchor);
    let selector = request.target().cloned().unwrap_or(TargetSelector::First);
    let phase = locator::find_target_phase(manifest, &selector);
    let group_id = group
        .handle()
        .and_then(|h| manifest.object(h))
        .map(|o| o.id().clone());
    let phase_id = phase
        .and_then(|h| manifest.object(h))
        .map(|o| o.id().clone());
    let phase_name = phase
        .and_then(|h| manifest.object(h))
        .and_then(|o| o.comment())
        .unwrap_or("Sources");
    let build_comment = format!("{} in {}", name, phase_name);

    result.file_ref = insert_file_reference(manifest, request, ids);
    if result.file_ref.is_none() {
        result.skip(
            RegistrationStep::FileReference,
            SkipReason::MissingSection(SectionKind::FileReference),
        );
    }

    result.build_file = match &result.file_ref {
        Some(file_ref) => {
            let inserted = insert_build_file(manifest, name, &build_comment, file_ref, ids);
            if inserted.is_none() {
                result.skip(
                    RegistrationStep::BuildFile,
                    SkipReason::MissingSection(SectionKind::BuildFile),
                );
            }
            inserted
        }
        None => {
            result.skip(
                RegistrationStep::BuildFile,
                SkipReason::DependsOn(RegistrationStep::FileReference),
            );
            None
        }
    };

    match (&result.file_ref, group_id) {
        (None, _) => result.skip(
            RegistrationStep::GroupMembership,
            SkipReason::DependsOn(RegistrationStep::FileReference),
        ),
        (Some(_), None) => result.skip(
            RegistrationStep::GroupMembership,
            SkipReason::MissingGroup {
                group: request.group().map(str::to_string),
                anchor: anchor.map(str::to_string),
            },
        ),
        (Some(file_ref), Some(group_id)) => {
            let file_ref = file_ref.clone();
            if append(manifest, &group_id, "children", &file_ref, name) {
                result.group = Some(group_id);
                result.group_via = match group {
                    GroupResolution::Named(_) => Some(GroupVia::Named),
                    GroupResolution::Anchor(_) => Some(GroupVia::Anchor),
                    GroupResolution::NotFound => None,
                };
            } else {
                result.skip(
                    RegistrationStep::GroupMembership,
                    SkipReason::MissingList("children"),
                );
            }
        }
    }

    match (&result.build_file, phase_id) {
        (None, _) => result.skip(
            RegistrationStep::TargetMembership,
            SkipReason::DependsOn(RegistrationStep::BuildFile),
        ),
        (Some(_), None) => result.skip(
            RegistrationStep::TargetMembership,
            SkipReason::MissingTarget(selector),
        ),
        (Some(build_file), Some(phase_id)) => {
            let build_file = build_file.clone();
            if append(manifest, &phase_id, "files", &build_file, &build_comment) {
                result.target_phase = Some(phase_id);
            } else {
                result.skip(
                    RegistrationStep::TargetMembership,
                    SkipReason::MissingList("files"),
                );
            }
        }
    }

    result
}

fn insert_file_reference(
    manifest: &mut Manifest,
    request: &RegistrationRequest,
    ids: &mut impl IdentifierSource,
) -> Option<Identifier> {
    let section = locator::find_section(manifest, &SectionKind::FileReference)?;
    let indent = manifest.section(section)?.entry_indent().to_string();
    let id = manifest.mint_identifier(ids);

    let name = request.display_name();
    let path = request.file_name();
    let kind = FileKind::from_path(request.source_path());
    let mut fields = vec![
        Field::new("isa", "PBXFileReference"),
        Field::new("lastKnownFileType", kind.last_known_file_type()),
    ];
    if path != name {
        fields.push(Field::new("name", name));
    }
    fields.push(Field::new("path", path));
    fields.push(Field::new("sourceTree", "<group>"));

    let newline = manifest.newline();
    let object = Object::inline(&indent, id.clone(), name, fields, newline);
    manifest.insert_object(section, object).map(|_| id)
}

fn insert_build_file(
    manifest: &mut Manifest,
    name: &str,
    comment: &str,
    file_ref: &Identifier,
    ids: &mut impl IdentifierSource,
) -> Option<Identifier> {
    let section = locator::find_section(manifest, &SectionKind::BuildFile)?;
    let indent = manifest.section(section)?.entry_indent().to_string();
    let id = manifest.mint_identifier(ids);

    let fields = vec![
        Field::new("isa", "PBXBuildFile"),
        Field::new("fileRef", file_ref.as_str()).with_comment(name),
    ];
    let newline = manifest.newline();
    let object = Object::inline(&indent, id.clone(), comment, fields, newline);
    manifest.insert_object(section, object).map(|_| id)
}

/// Append by identifier; handles may have shifted since resolution.
fn append(
    manifest: &mut Manifest,
    container: &Identifier,
    key: &str,
    id: &Identifier,
    comment: &str,
) -> bool {
    let handle: Option<ObjectHandle> = locator::find_object(manifest, container);
    handle.is_some_and(|h| manifest.append_reference(h, key, id, comment))
}
