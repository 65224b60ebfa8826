//! Section and anchor locator
//!
//! Answers "where does this record go": the section for an entry, the group
//! whose `children` receive a file reference, and the sources phase whose
//! `files` receive a build file.

use std::fmt;

use crate::domain::entities::{Manifest, Object, ObjectHandle, SectionHandle};
use crate::domain::value_objects::{Identifier, SectionKind};

/// How the engine picks a target's sources phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSelector {
    /// A native target found by its `name`
    Name(String),
    /// A native target or sources phase identifier
    Id(Identifier),
    /// The first sources phase in the manifest
    First,
}

impl TargetSelector {
    /// Identifier wins over name; neither means `First`.
    pub fn from_parts(name: Option<String>, id: Option<Identifier>) -> Self {
        match (id, name) {
            (Some(id), _) => TargetSelector::Id(id),
            (None, Some(name)) => TargetSelector::Name(name),
            (None, None) => TargetSelector::First,
        }
    }
}

impl fmt::Display for TargetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSelector::Name(name) => write!(f, "target '{}'", name),
            TargetSelector::Id(id) => write!(f, "target {}", id),
            TargetSelector::First => write!(f, "first sources phase"),
        }
    }
}

/// Where a group membership will be appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupResolution {
    /// A group literally named after the requested group
    Named(ObjectHandle),
    /// The group holding the anchor file
    Anchor(ObjectHandle),
    NotFound,
}

impl GroupResolution {
    pub fn handle(&self) -> Option<ObjectHandle> {
        match self {
            GroupResolution::Named(handle) | GroupResolution::Anchor(handle) => Some(*handle),
            GroupResolution::NotFound => None,
        }
    }
}

pub fn find_section(manifest: &Manifest, kind: &SectionKind) -> Option<SectionHandle> {
    manifest
        .sections()
        .find(|(_, section)| section.kind() == kind)
        .map(|(handle, _)| handle)
}

/// Find any object by identifier.
pub fn find_object(manifest: &Manifest, id: &Identifier) -> Option<ObjectHandle> {
    manifest
        .objects()
        .find(|(_, object)| object.id() == id)
        .map(|(handle, _)| handle)
}

/// Find the group a file reference should join.
///
/// Resolution order: a group named `group_name` (by `name`, `path` or
/// comment), then the group whose children contain `anchor`.
pub fn find_container_for(
    manifest: &Manifest,
    group_name: Option<&str>,
    anchor: Option<&str>,
) -> GroupResolution {
    if let Some(handle) = group_name.and_then(|name| find_group_named(manifest, name)) {
        return GroupResolution::Named(handle);
    }
    if let Some(handle) = anchor.and_then(|anchor| find_group_holding(manifest, anchor)) {
        return GroupResolution::Anchor(handle);
    }
    GroupResolution::NotFound
}

fn groups(manifest: &Manifest) -> impl Iterator<Item = (ObjectHandle, &Object)> {
    manifest
        .objects()
        .filter(move |(handle, _)| is_in(manifest, *handle, &SectionKind::Group))
}

fn find_group_named(manifest: &Manifest, name: &str) -> Option<ObjectHandle> {
    groups(manifest)
        .find(|(_, group)| {
            group.field("name") == Some(name)
                || group.field("path") == Some(name)
                || group.comment() == Some(name)
        })
        .map(|(handle, _)| handle)
}

fn find_group_holding(manifest: &Manifest, anchor: &str) -> Option<ObjectHandle> {
    let anchor_ids: Vec<Identifier> = manifest
        .objects()
        .filter(|(_, object)| object.display_name() == Some(anchor))
        .filter(|(handle, _)| is_in(manifest, *handle, &SectionKind::FileReference))
        .map(|(_, object)| object.id().clone())
        .collect();

    groups(manifest)
        .find(|(_, group)| {
            group.list("children").is_some_and(|children| {
                children.items().iter().any(|item| {
                    item.id().is_some_and(|id| anchor_ids.contains(id))
                        || item.comment() == Some(anchor)
                })
            })
        })
        .map(|(handle, _)| handle)
}

/// Find the sources phase a build file should join.
pub fn find_target_phase(manifest: &Manifest, selector: &TargetSelector) -> Option<ObjectHandle> {
    match selector {
        TargetSelector::First => phases(manifest).next(),
        TargetSelector::Name(name) => {
            let (target, _) = manifest.objects().find(|(handle, object)| {
                is_in(manifest, *handle, &SectionKind::NativeTarget)
                    && (object.field("name") == Some(name.as_str())
                        || object.comment() == Some(name.as_str()))
            })?;
            sources_phase_of(manifest, target)
        }
        TargetSelector::Id(id) => {
            let handle = find_object(manifest, id)?;
            match manifest.object(handle)?.isa() {
                Some("PBXSourcesBuildPhase") => Some(handle),
                Some("PBXNativeTarget") => sources_phase_of(manifest, handle),
                _ => None,
            }
        }
    }
}

fn phases(manifest: &Manifest) -> impl Iterator<Item = ObjectHandle> + '_ {
    manifest
        .objects()
        .filter(move |(handle, _)| is_in(manifest, *handle, &SectionKind::SourcesBuildPhase))
        .map(|(handle, _)| handle)
}

fn sources_phase_of(manifest: &Manifest, target: ObjectHandle) -> Option<ObjectHandle> {
    let build_phases = manifest.object(target)?.list("buildPhases")?;
    phases(manifest).find(|phase| {
        manifest
            .object(*phase)
            .is_some_and(|object| build_phases.contains(object.id()))
    })
}

fn is_in(manifest: &Manifest, handle: ObjectHandle, kind: &SectionKind) -> bool {
    manifest
        .section(handle.section())
        .is_some_and(|section| section.kind() == kind)
}
