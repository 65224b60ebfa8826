//! Manifest entity - the in-memory model of a project descriptor
//!
//! The manifest is parsed once, edited in place, and serialized once.
//! Parsing never fails: lines that are not understood are kept verbatim, and
//! every parsed element remembers its original lines, so
//! `Manifest::parse(x).serialize() == x` for any input.

use std::collections::{HashMap, HashSet};

use crate::domain::value_objects::{
    is_canonical_token, Identifier, IdentifierSource, SectionKind,
};

use super::object::Object;
use super::section::{Section, SectionItem};
use super::syntax;

/// Top-level piece of the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A line outside any section
    Verbatim(String),
    Section(Section),
}

/// Position of a section within the manifest
///
/// Handles stay valid until lines outside sections are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionHandle(pub(crate) usize);

/// Position of an object within a section
///
/// Inserting into the same section invalidates handles taken before the insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    pub(crate) section: SectionHandle,
    pub(crate) index: usize,
}

impl ObjectHandle {
    pub fn section(&self) -> SectionHandle {
        self.section
    }
}

/// Parsed project descriptor
#[derive(Debug, Clone)]
pub struct Manifest {
    segments: Vec<Segment>,
    newline: &'static str,
    /// Registration index keyed by (section kind, display name)
    index: HashMap<(SectionKind, String), usize>,
    /// Every canonical identifier token seen anywhere, plus all object ids
    identifiers: HashSet<String>,
}

impl Manifest {
    /// Sections whose entries are tracked in the registration index
    const INDEXED: [SectionKind; 2] = [SectionKind::BuildFile, SectionKind::FileReference];

    pub fn parse(text: &str) -> Self {
        let lines = syntax::split_lines(text);
        let mut segments = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            if let Some(name) = syntax::begin_marker_name(lines[i]) {
                let kind = SectionKind::from_name(name);
                let end_marker = kind.end_marker();
                let end = lines[i + 1..]
                    .iter()
                    .position(|line| syntax::content(line).trim() == end_marker);
                if let Some(end) = end {
                    let end = i + 1 + end;
                    segments.push(Segment::Section(Section::parse(
                        kind,
                        lines[i],
                        &lines[i + 1..end],
                        lines[end],
                    )));
                    i = end + 1;
                    continue;
                }
            }
            segments.push(Segment::Verbatim(lines[i].to_string()));
            i += 1;
        }

        let mut manifest = Self {
            segments,
            newline: if text.contains("\r\n") { "\r\n" } else { "\n" },
            index: HashMap::new(),
            identifiers: HashSet::new(),
        };
        manifest.reindex();
        manifest
    }

    pub fn serialize(&self) -> String {
        self.lines().concat()
    }

    /// Line terminator used for new lines (`\n` or `\r\n`, detected on parse)
    pub fn newline(&self) -> &'static str {
        self.newline
    }

    /// Every physical line, terminators included.
    pub fn lines(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Verbatim(line) => out.push(line.as_str()),
                Segment::Section(section) => section.write_lines(&mut out),
            }
        }
        out
    }

    pub fn line_count(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Verbatim(_) => 1,
                Segment::Section(section) => section.line_count(),
            })
            .sum()
    }

    /// Whether any line contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionHandle, &Section)> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(i, segment)| match segment {
                Segment::Section(section) => Some((SectionHandle(i), section)),
                Segment::Verbatim(_) => None,
            })
    }

    pub fn section(&self, handle: SectionHandle) -> Option<&Section> {
        match self.segments.get(handle.0)? {
            Segment::Section(section) => Some(section),
            Segment::Verbatim(_) => None,
        }
    }

    fn section_mut(&mut self, handle: SectionHandle) -> Option<&mut Section> {
        match self.segments.get_mut(handle.0)? {
            Segment::Section(section) => Some(section),
            Segment::Verbatim(_) => None,
        }
    }

    /// All objects across all sections.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectHandle, &Object)> {
        self.sections().flat_map(|(section, s)| {
            s.indexed_objects()
                .map(move |(index, object)| (ObjectHandle { section, index }, object))
        })
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&Object> {
        match self.section(handle.section)?.items.get(handle.index)? {
            SectionItem::Object(object) => Some(object),
            SectionItem::Raw(_) => None,
        }
    }

    fn object_mut(&mut self, handle: ObjectHandle) -> Option<&mut Object> {
        match self.section_mut(handle.section)?.items.get_mut(handle.index)? {
            SectionItem::Object(object) => Some(object),
            SectionItem::Raw(_) => None,
        }
    }

    /// Whether an entry named `name` exists in a section of `kind`.
    pub fn is_indexed(&self, kind: &SectionKind, name: &str) -> bool {
        self.index
            .get(&(kind.clone(), name.to_string()))
            .is_some_and(|count| *count > 0)
    }

    /// Whether `id` is declared or referenced anywhere in the manifest.
    pub fn knows_identifier(&self, id: &Identifier) -> bool {
        self.identifiers.contains(id.as_str())
    }

    /// Draw identifiers from `source` until one is unused in this manifest.
    ///
    /// The returned identifier is reserved immediately, so consecutive calls
    /// never return the same value.
    pub fn mint_identifier(&mut self, source: &mut impl IdentifierSource) -> Identifier {
        loop {
            let id = source.next_identifier();
            if self.identifiers.insert(id.as_str().to_string()) {
                return id;
            }
        }
    }

    /// Insert `object` as the first entry of `section`.
    pub fn insert_object(&mut self, section: SectionHandle, object: Object) -> Option<ObjectHandle> {
        let kind = self.section(section)?.kind().clone();
        if Self::INDEXED.contains(&kind) {
            if let Some(name) = object.display_name() {
                *self.index.entry((kind, name.to_string())).or_insert(0) += 1;
            }
        }
        self.identifiers.insert(object.id().as_str().to_string());

        self.section_mut(section)?
            .items
            .insert(0, SectionItem::Object(object));
        Some(ObjectHandle { section, index: 0 })
    }

    /// Append `id` to the `key` reference list of the object at `target`.
    ///
    /// Returns `false` when the object or the list does not exist.
    pub fn append_reference(
        &mut self,
        target: ObjectHandle,
        key: &str,
        id: &Identifier,
        comment: &str,
    ) -> bool {
        let newline = self.newline;
        let Some(list) = self.object_mut(target).and_then(|o| o.list_mut(key)) else {
            return false;
        };
        list.push(id, comment, newline);
        self.identifiers.insert(id.as_str().to_string());
        true
    }

    /// Remove every line containing `needle` and return how many went.
    ///
    /// A section whose begin or end marker matches is removed whole, as is an
    /// object whose header or footer matches.
    pub fn remove_lines_containing(&mut self, needle: &str) -> usize {
        let before = self.line_count();
        let segments = std::mem::take(&mut self.segments);
        self.segments = segments
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Verbatim(line) => {
                    (!line.contains(needle)).then_some(Segment::Verbatim(line))
                }
                Segment::Section(mut section) => {
                    if section.begin.contains(needle) || section.end.contains(needle) {
                        return None;
                    }
                    section.remove_lines_containing(needle);
                    Some(Segment::Section(section))
                }
            })
            .collect();
        self.reindex();
        before - self.line_count()
    }

    /// Rebuild the registration index and identifier set from scratch.
    fn reindex(&mut self) {
        let mut index = HashMap::new();
        for (_, section) in self.sections() {
            if !Self::INDEXED.contains(section.kind()) {
                continue;
            }
            for object in section.objects() {
                if let Some(name) = object.display_name() {
                    *index
                        .entry((section.kind().clone(), name.to_string()))
                        .or_insert(0) += 1;
                }
            }
        }

        let mut identifiers: HashSet<String> = self
            .objects()
            .map(|(_, object)| object.id().as_str().to_string())
            .collect();
        for line in self.lines() {
            identifiers.extend(
                line.split(|c: char| !c.is_ascii_alphanumeric())
                    .filter(|token| is_canonical_token(token))
                    .map(str::to_string),
            );
        }

        self.index = index;
        self.identifiers = identifiers;
    }
}
