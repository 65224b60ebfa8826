//! Common test utilities for pbxedit integration tests.
//!
//! - `TestEnv`: a temp directory holding `App.xcodeproj/project.pbxproj`,
//!   plus helpers to run the `pbxedit` binary against it
//! - Fixtures: reference manifests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
