//! Line-level lexical helpers for the descriptor format.
//!
//! Nothing here validates the grammar; every helper answers "does this line
//! look like X" and returns `None` otherwise, leaving the line verbatim.

use std::borrow::Cow;

use crate::domain::value_objects::Identifier;

use super::object::Field;

/// Split text into physical lines, each keeping its terminator.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// A line without its `\n` / `\r\n` terminator.
pub(crate) fn content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Leading whitespace of a line.
pub(crate) fn indent_of(line: &str) -> &str {
    let trimmed = line.trim_start_matches(|c: char| c == ' ' || c == '\t');
    &line[..line.len() - trimmed.len()]
}

/// Name inside `/* Begin <Name> section */`.
pub(crate) fn begin_marker_name(line: &str) -> Option<&str> {
    content(line)
        .trim()
        .strip_prefix("/* Begin ")?
        .strip_suffix(" section */")
}

/// `<ID> /* comment */ = <rest>`
pub(crate) struct Header<'a> {
    pub id: Identifier,
    pub comment: Option<String>,
    pub rest: &'a str,
}

/// Parse the `<ID> /* comment */ = {` prefix shared by inline and block objects.
pub(crate) fn parse_object_header(line: &str) -> Option<Header<'_>> {
    let text = content(line).trim_start();
    let (id, rest) = split_identifier(text)?;
    let (comment, rest) = take_comment(rest.trim_start());
    let rest = rest.trim_start().strip_prefix('=')?.trim();
    if !rest.starts_with('{') {
        return None;
    }
    Some(Header { id, comment, rest })
}

/// Parse a list member line `<ID> /* comment */,`.
pub(crate) fn parse_list_member(line: &str) -> (Option<Identifier>, Option<String>) {
    let text = content(line).trim();
    let text = text.strip_suffix(',').unwrap_or(text).trim_end();
    match split_identifier(text) {
        Some((id, rest)) => {
            let (comment, _) = take_comment(rest.trim_start());
            (Some(id), comment)
        }
        None => (None, None),
    }
}

/// Key of a `key = (` list opener.
pub(crate) fn parse_list_open(line: &str) -> Option<&str> {
    let key = content(line)
        .trim()
        .strip_suffix('(')?
        .trim_end()
        .strip_suffix('=')?
        .trim();
    Identifier::parse(key).map(|_| key)
}

/// Whether a line closes a reference list.
pub(crate) fn is_list_close(line: &str) -> bool {
    content(line).trim_start().starts_with(");")
}

/// Parse a single-line `key = value;` statement.
pub(crate) fn parse_field_line(line: &str) -> Option<Field> {
    let text = content(line).trim();
    let statement = text.strip_suffix(';')?;
    parse_statement(statement)
}

/// Parse the `{...}` body of an inline object into fields.
pub(crate) fn parse_inline_fields(rest: &str) -> Vec<Field> {
    let open = match rest.find('{') {
        Some(pos) => pos + 1,
        None => return Vec::new(),
    };
    let close = rest.rfind('}').unwrap_or(rest.len()).max(open);
    split_statements(&rest[open..close])
        .into_iter()
        .filter_map(parse_statement)
        .collect()
}

fn split_identifier(text: &str) -> Option<(Identifier, &str)> {
    let end = text
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    let id = Identifier::parse(&text[..end])?;
    Some((id, &text[end..]))
}

fn take_comment(text: &str) -> (Option<String>, &str) {
    if let Some(after) = text.strip_prefix("/*") {
        if let Some(end) = after.find("*/") {
            return (Some(after[..end].trim().to_string()), &after[end + 2..]);
        }
    }
    (None, text)
}

/// Split on `;` at nesting depth zero, outside quotes and comments.
fn split_statements(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut in_quote = false;
    let mut escaped = false;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_quote = false;
            }
            i += 1;
            continue;
        }
        match b {
            b'"' => in_quote = true,
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = match body[i + 2..].find("*/") {
                    Some(end) => i + 2 + end + 2,
                    None => bytes.len(),
                };
                continue;
            }
            b'(' | b'{' => depth += 1,
            b')' | b'}' => depth -= 1,
            b';' if depth <= 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if !body[start..].trim().is_empty() {
        parts.push(&body[start..]);
    }
    parts
}

fn parse_statement(statement: &str) -> Option<Field> {
    let (key, value) = statement.split_once('=')?;
    let key = unquote(key.trim()).into_owned();
    if key.is_empty() {
        return None;
    }
    let value = value.trim();

    let (value, rest) = if value.starts_with('"') {
        let end = closing_quote(value)?;
        (unquote(&value[..=end]).into_owned(), &value[end + 1..])
    } else {
        match value.find("/*") {
            Some(pos) => (value[..pos].trim_end().to_string(), &value[pos..]),
            None => (value.to_string(), ""),
        }
    };
    let (comment, _) = take_comment(rest.trim_start());

    Some(Field {
        key,
        value,
        comment,
    })
}

fn closing_quote(value: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in value.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(i),
            _ => {}
        }
    }
    None
}

fn unquote(text: &str) -> Cow<'_, str> {
    let Some(inner) = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return Cow::Borrowed(text);
    };
    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// Quote a value unless it consists only of characters Xcode leaves bare.
pub(crate) fn quote(value: &str) -> Cow<'_, str> {
    let bare = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '/' | ':' | '.' | '-'));
    if bare {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    Cow::Owned(out)
}
