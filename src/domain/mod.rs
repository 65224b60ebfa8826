//! Domain Layer
//!
//! The manifest mutation engine - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The structural model of a project descriptor (Manifest, Section, Object)
//! - `value_objects/` - Immutable value types (Identifier, SectionKind, FileKind)
//! - `services/` - Locator, duplicate checker, inserter, remover
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Parse once, serialize once** - Edits are applied to the in-memory model
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
