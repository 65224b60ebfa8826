//! Object records
//!
//! An object is `<ID> /* comment */ = { ... };`, either on a single line
//! (build files, file references) or spread over a block (groups, targets,
//! build phases). Every object keeps its original lines so that untouched
//! objects serialize byte-for-byte.

use crate::domain::value_objects::Identifier;

use super::syntax::{self, quote};

/// A `key = value;` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    /// Unquoted value with any trailing comment removed
    pub value: String,
    pub comment: Option<String>,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    fn render(&self) -> String {
        match &self.comment {
            Some(comment) => format!("{} = {} /* {} */;", self.key, quote(&self.value), comment),
            None => format!("{} = {};", self.key, quote(&self.value)),
        }
    }
}

/// One member of a reference list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    id: Option<Identifier>,
    comment: Option<String>,
    raw: String,
}

impl ListItem {
    fn parse(raw: &str) -> Self {
        let (id, comment) = syntax::parse_list_member(raw);
        Self {
            id,
            comment,
            raw: raw.to_string(),
        }
    }

    /// Identifier of the member, `None` for quoted scalars
    pub fn id(&self) -> Option<&Identifier> {
        self.id.as_ref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// An ordered `key = ( ... );` list of identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefList {
    key: String,
    pub(crate) open: String,
    pub(crate) items: Vec<ListItem>,
    pub(crate) close: String,
}

impl RefList {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.items.iter().any(|item| item.id() == Some(id))
    }

    /// Append a member, indented one level deeper than the closing `);`.
    pub(crate) fn push(&mut self, id: &Identifier, comment: &str, newline: &str) {
        let indent = format!("{}\t", syntax::indent_of(&self.close));
        let raw = format!("{indent}{id} /* {comment} */,{newline}");
        self.items.push(ListItem {
            id: Some(id.clone()),
            comment: Some(comment.to_string()),
            raw,
        });
    }

    pub(crate) fn line_count(&self) -> usize {
        self.items.len() + 2
    }

    fn write_lines<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.open);
        out.extend(self.items.iter().map(|item| item.raw.as_str()));
        out.push(&self.close);
    }
}

/// A line inside a block object
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BodyLine {
    Field { field: Field, raw: String },
    List(RefList),
    Raw(String),
}

impl BodyLine {
    pub(crate) fn line_count(&self) -> usize {
        match self {
            BodyLine::List(list) => list.line_count(),
            _ => 1,
        }
    }

    fn write_lines<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            BodyLine::Field { raw, .. } | BodyLine::Raw(raw) => out.push(raw),
            BodyLine::List(list) => list.write_lines(out),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ObjectForm {
    Inline {
        line: String,
        fields: Vec<Field>,
    },
    Block {
        header: String,
        body: Vec<BodyLine>,
        footer: String,
    },
}

/// A keyed record in a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    id: Identifier,
    comment: Option<String>,
    pub(crate) form: ObjectForm,
}

impl Object {
    /// Try to read a single-line object from `line`.
    pub(crate) fn parse_inline(line: &str) -> Option<Self> {
        let header = syntax::parse_object_header(line)?;
        if header.rest == "{" || !header.rest.ends_with("};") {
            return None;
        }
        let fields = syntax::parse_inline_fields(header.rest);
        Some(Self {
            id: header.id,
            comment: header.comment,
            form: ObjectForm::Inline {
                line: line.to_string(),
                fields,
            },
        })
    }

    /// Try to read a block object starting at `lines[0]`.
    ///
    /// Returns the object and the number of lines it spans.
    pub(crate) fn parse_block(lines: &[&str]) -> Option<(Self, usize)> {
        let (first, rest) = lines.split_first()?;
        let header = syntax::parse_object_header(first)?;
        if header.rest != "{" {
            return None;
        }
        let indent = syntax::indent_of(first);
        let footer = rest.iter().position(|line| {
            syntax::content(line).trim() == "};" && syntax::indent_of(line) == indent
        })?;

        let object = Self {
            id: header.id,
            comment: header.comment,
            form: ObjectForm::Block {
                header: first.to_string(),
                body: parse_body(&rest[..footer]),
                footer: rest[footer].to_string(),
            },
        };
        Some((object, footer + 2))
    }

    /// Build a new single-line object.
    pub fn inline(
        indent: &str,
        id: Identifier,
        comment: &str,
        fields: Vec<Field>,
        newline: &str,
    ) -> Self {
        let rendered: Vec<String> = fields.iter().map(Field::render).collect();
        let line = format!(
            "{indent}{id} /* {comment} */ = {{{} }};{newline}",
            rendered.join(" ")
        );
        Self {
            id,
            comment: Some(comment.to_string()),
            form: ObjectForm::Inline { line, fields },
        }
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.form, ObjectForm::Inline { .. })
    }

    pub fn isa(&self) -> Option<&str> {
        self.field("isa")
    }

    /// Top-level field value by key.
    pub fn field(&self, key: &str) -> Option<&str> {
        match &self.form {
            ObjectForm::Inline { fields, .. } => fields
                .iter()
                .find(|f| f.key == key)
                .map(|f| f.value.as_str()),
            ObjectForm::Block { body, .. } => body.iter().find_map(|line| match line {
                BodyLine::Field { field, .. } if field.key == key => Some(field.value.as_str()),
                _ => None,
            }),
        }
    }

    pub fn list(&self, key: &str) -> Option<&RefList> {
        match &self.form {
            ObjectForm::Block { body, .. } => body.iter().find_map(|line| match line {
                BodyLine::List(list) if list.key == key => Some(list),
                _ => None,
            }),
            ObjectForm::Inline { .. } => None,
        }
    }

    pub(crate) fn list_mut(&mut self, key: &str) -> Option<&mut RefList> {
        match &mut self.form {
            ObjectForm::Block { body, .. } => body.iter_mut().find_map(|line| match line {
                BodyLine::List(list) if list.key == key => Some(list),
                _ => None,
            }),
            ObjectForm::Inline { .. } => None,
        }
    }

    /// Name shown in the project navigator.
    ///
    /// Build files are named after their comment minus the ` in <Phase>`
    /// suffix; other records use the comment, then `name`, then the last
    /// component of `path`.
    pub fn display_name(&self) -> Option<&str> {
        if let Some(comment) = self.comment() {
            if self.isa() == Some("PBXBuildFile") {
                return Some(
                    comment
                        .rsplit_once(" in ")
                        .map(|(name, _)| name)
                        .unwrap_or(comment),
                );
            }
            return Some(comment);
        }
        self.field("name").or_else(|| {
            self.field("path")
                .map(|path| path.rsplit('/').next().unwrap_or(path))
        })
    }

    pub(crate) fn header_line(&self) -> &str {
        match &self.form {
            ObjectForm::Inline { line, .. } => line,
            ObjectForm::Block { header, .. } => header,
        }
    }

    pub fn line_count(&self) -> usize {
        match &self.form {
            ObjectForm::Inline { .. } => 1,
            ObjectForm::Block { body, .. } => {
                body.iter().map(BodyLine::line_count).sum::<usize>() + 2
            }
        }
    }

    pub(crate) fn write_lines<'a>(&'a self, out: &mut Vec<&'a str>) {
        match &self.form {
            ObjectForm::Inline { line, .. } => out.push(line),
            ObjectForm::Block {
                header,
                body,
                footer,
            } => {
                out.push(header);
                for line in body {
                    line.write_lines(out);
                }
                out.push(footer);
            }
        }
    }

    /// Drop every line containing `needle`.
    ///
    /// Returns `None` when the header or footer matches; a list whose opening
    /// or closing line matches is dropped with all its members.
    pub(crate) fn without_lines_containing(mut self, needle: &str) -> Option<Self> {
        match &mut self.form {
            ObjectForm::Inline { line, .. } => {
                if line.contains(needle) {
                    return None;
                }
            }
            ObjectForm::Block {
                header,
                body,
                footer,
            } => {
                if header.contains(needle) || footer.contains(needle) {
                    return None;
                }
                body.retain_mut(|line| match line {
                    BodyLine::Field { raw, .. } | BodyLine::Raw(raw) => !raw.contains(needle),
                    BodyLine::List(list) => {
                        if list.open.contains(needle) || list.close.contains(needle) {
                            return false;
                        }
                        list.items.retain(|item| !item.raw.contains(needle));
                        true
                    }
                });
            }
        }
        Some(self)
    }

    /// Raw lines of this object, terminators included.
    pub fn lines(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.line_count());
        self.write_lines(&mut out);
        out
    }
}

fn parse_body(lines: &[&str]) -> Vec<BodyLine> {
    let mut body = Vec::with_capacity(lines.len());
    let mut nested = 0usize;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let text = syntax::content(line).trim();

        if nested > 0 {
            if text.ends_with('{') {
                nested += 1;
            } else if text.starts_with('}') {
                nested -= 1;
            }
            body.push(BodyLine::Raw(line.to_string()));
            i += 1;
            continue;
        }

        if let Some(key) = syntax::parse_list_open(line) {
            if let Some(close) = lines[i + 1..].iter().position(|l| syntax::is_list_close(l)) {
                let close = i + 1 + close;
                body.push(BodyLine::List(RefList {
                    key: key.to_string(),
                    open: line.to_string(),
                    items: lines[i + 1..close]
                        .iter()
                        .map(|l| ListItem::parse(l))
                        .collect(),
                    close: lines[close].to_string(),
                }));
                i = close + 1;
                continue;
            }
        }

        if text.ends_with('{') {
            nested = 1;
            body.push(BodyLine::Raw(line.to_string()));
        } else if let Some(field) = syntax::parse_field_line(line) {
            body.push(BodyLine::Field {
                field,
                raw: line.to_string(),
            });
        } else {
            body.push(BodyLine::Raw(line.to_string()));
        }
        i += 1;
    }

    body
}
