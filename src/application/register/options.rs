//! Register options

use crate::domain::services::DuplicateCheck;

/// Options for a register run
#[derive(Debug, Clone, Default)]
pub struct RegisterOptions {
    /// File whose group receives new files when the requested group is missing
    pub anchor: Option<String>,
    /// How an already-registered file is detected
    pub duplicate_check: DuplicateCheck,
    /// Whether this is a dry run (no write)
    pub dry_run: bool,
    /// Seed for deterministic identifiers (None = random)
    pub seed: Option<u64>,
}

impl RegisterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, anchor: Option<String>) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_duplicate_check(mut self, check: DuplicateCheck) -> Self {
        self.duplicate_check = check;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
