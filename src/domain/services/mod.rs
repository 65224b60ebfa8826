//! Domain Services
//!
//! Pure operations on a parsed manifest. No I/O; the application layer
//! loads and persists.

pub mod duplicate;
pub mod inserter;
pub mod locator;
pub mod remover;

pub use duplicate::{is_registered, DuplicateCheck};
pub use inserter::{
    register, GroupVia, Registration, RegistrationRequest, RegistrationStep, SkipReason,
    SkippedStep,
};
pub use locator::{
    find_container_for, find_object, find_section, find_target_phase, GroupResolution,
    TargetSelector,
};
pub use remover::unregister;
