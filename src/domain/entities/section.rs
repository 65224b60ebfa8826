//! Sections - `/* Begin X section */ ... /* End X section */` regions

use crate::domain::value_objects::SectionKind;

use super::object::Object;
use super::syntax;

/// One item between the begin and end markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionItem {
    Object(Object),
    /// A line that is not an object (blank line, stray comment)
    Raw(String),
}

impl SectionItem {
    pub(crate) fn line_count(&self) -> usize {
        match self {
            SectionItem::Object(object) => object.line_count(),
            SectionItem::Raw(_) => 1,
        }
    }
}

/// A marker-delimited region of the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    kind: SectionKind,
    pub(crate) begin: String,
    pub(crate) items: Vec<SectionItem>,
    pub(crate) end: String,
}

impl Section {
    pub(crate) fn parse(kind: SectionKind, begin: &str, body: &[&str], end: &str) -> Self {
        let mut items = Vec::with_capacity(body.len());
        let mut i = 0;
        while i < body.len() {
            if let Some(object) = Object::parse_inline(body[i]) {
                items.push(SectionItem::Object(object));
                i += 1;
            } else if let Some((object, consumed)) = Object::parse_block(&body[i..]) {
                items.push(SectionItem::Object(object));
                i += consumed;
            } else {
                items.push(SectionItem::Raw(body[i].to_string()));
                i += 1;
            }
        }

        Self {
            kind,
            begin: begin.to_string(),
            items,
            end: end.to_string(),
        }
    }

    pub fn kind(&self) -> &SectionKind {
        &self.kind
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.items.iter().filter_map(|item| match item {
            SectionItem::Object(object) => Some(object),
            SectionItem::Raw(_) => None,
        })
    }

    /// Drop every item line containing `needle`.
    pub(crate) fn remove_lines_containing(&mut self, needle: &str) {
        let items = std::mem::take(&mut self.items);
        self.items = items
            .into_iter()
            .filter_map(|item| match item {
                SectionItem::Object(object) => object
                    .without_lines_containing(needle)
                    .map(SectionItem::Object),
                SectionItem::Raw(line) => (!line.contains(needle)).then_some(SectionItem::Raw(line)),
            })
            .collect();
    }

    /// Objects paired with their item index.
    pub(crate) fn indexed_objects(&self) -> impl Iterator<Item = (usize, &Object)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                SectionItem::Object(object) => Some((index, object)),
                SectionItem::Raw(_) => None,
            })
    }

    /// Indentation of existing entries, `\t\t` for an empty section.
    pub fn entry_indent(&self) -> &str {
        self.objects()
            .next()
            .map(|object| syntax::indent_of(object.header_line()))
            .unwrap_or("\t\t")
    }

    pub(crate) fn line_count(&self) -> usize {
        self.items.iter().map(SectionItem::line_count).sum::<usize>() + 2
    }

    pub(crate) fn write_lines<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.begin);
        for item in &self.items {
            match item {
                SectionItem::Object(object) => object.write_lines(out),
                SectionItem::Raw(line) => out.push(line),
            }
        }
        out.push(&self.end);
    }
}
