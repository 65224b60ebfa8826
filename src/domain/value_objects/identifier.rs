//! Identifier Value Object
//!
//! Opaque object identifiers used to cross-reference records in a project
//! descriptor, plus the sources that mint new ones.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Width of identifiers minted by this crate (24 uppercase hex digits).
pub const IDENTIFIER_LEN: usize = 24;

/// Object identifier
///
/// Existing descriptors are parsed leniently: any non-empty token of ASCII
/// alphanumerics or `_` is accepted. Minted identifiers are always canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Parse a token as an identifier.
    pub fn parse(token: &str) -> Option<Self> {
        if is_identifier_token(token) {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a 24-digit uppercase hex token.
    pub fn is_canonical(&self) -> bool {
        is_canonical_token(&self.0)
    }
}

pub(crate) fn is_identifier_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn is_canonical_token(token: &str) -> bool {
    token.len() == IDENTIFIER_LEN
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error returned when a string is not a valid identifier token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier '{0}': expected letters, digits or '_'")]
pub struct InvalidIdentifier(pub String);

impl FromStr for Identifier {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| InvalidIdentifier(s.to_string()))
    }
}

/// Source of fresh identifiers.
pub trait IdentifierSource {
    fn next_identifier(&mut self) -> Identifier;
}

impl<T: IdentifierSource + ?Sized> IdentifierSource for &mut T {
    fn next_identifier(&mut self) -> Identifier {
        (**self).next_identifier()
    }
}

/// Random identifiers derived from UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdentifiers;

impl IdentifierSource for RandomIdentifiers {
    fn next_identifier(&mut self) -> Identifier {
        let hex = Uuid::new_v4().simple().to_string().to_ascii_uppercase();
        Identifier(hex[..IDENTIFIER_LEN].to_string())
    }
}

/// Deterministic identifiers counting up from a seed.
///
/// Used for reproducible output (`--seed`) and tests.
#[derive(Debug, Clone)]
pub struct SequentialIdentifiers {
    next: u64,
}

impl SequentialIdentifiers {
    pub fn new(seed: u64) -> Self {
        Self { next: seed }
    }
}

impl IdentifierSource for SequentialIdentifiers {
    fn next_identifier(&mut self) -> Identifier {
        let id = Identifier(format!("{:0width$X}", self.next, width = IDENTIFIER_LEN));
        self.next = self.next.wrapping_add(1);
        id
    }
}
