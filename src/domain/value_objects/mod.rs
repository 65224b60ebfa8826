//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_kind;
mod identifier;
mod section_kind;

pub use file_kind::FileKind;
pub(crate) use identifier::is_canonical_token;
pub use identifier::{
    Identifier, IdentifierSource, InvalidIdentifier, RandomIdentifiers, SequentialIdentifiers,
    IDENTIFIER_LEN,
};
pub use section_kind::SectionKind;
