//! Domain Entities
//!
//! The structural model of a project descriptor:
//! - `Manifest` - ordered segments, registration index, identifier set
//! - `Section` - a `/* Begin X section */` region
//! - `Object` - a keyed record, inline or block, with reference lists

mod manifest;
mod object;
mod section;
mod syntax;

#[cfg(test)]
pub(crate) mod fixtures;

pub use manifest::{Manifest, ObjectHandle, SectionHandle, Segment};
pub use object::{Field, ListItem, Object, RefList};
pub use section::{Section, SectionItem};
