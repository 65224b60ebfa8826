//! Plan configuration for pbxedit
//!
//! Settings are layered:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PBXEDIT_*)
//! 3. Plan file (pbxedit.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{FileEntry, Plan, Verbosity, PLAN_FILE_NAME};
