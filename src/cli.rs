use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pbxedit::config::PLAN_FILE_NAME;
use pbxedit::Identifier;

/// pbxedit - register source files in Xcode project manifests
#[derive(Parser, Debug)]
#[command(name = "pbxedit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register source files with a target and a group
    Add {
        /// project.pbxproj, or the .xcodeproj directory holding it
        manifest: PathBuf,

        /// Source files to register
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Display name (only with a single file)
        #[arg(long)]
        name: Option<String>,

        /// Native target whose sources phase receives the files
        #[arg(short, long)]
        target: Option<String>,

        /// Identifier of the target or its sources phase
        #[arg(long, value_name = "ID")]
        target_id: Option<Identifier>,

        /// Group that receives the file references
        #[arg(short, long)]
        group: Option<String>,

        /// File whose group is used when the named group is missing
        #[arg(long)]
        anchor: Option<String>,

        /// Detect existing registrations by substring instead of by index
        #[arg(long)]
        text_duplicates: bool,

        /// Dry run - show the change without writing
        #[arg(long)]
        dry_run: bool,

        /// Mint identifiers from a counter starting at SEED
        #[arg(long, hide = true)]
        seed: Option<u64>,
    },

    /// Remove every line mentioning the given display names
    Remove {
        /// project.pbxproj, or the .xcodeproj directory holding it
        manifest: PathBuf,

        /// Display names to remove
        #[arg(required = true)]
        names: Vec<String>,

        /// Dry run - show the change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Register every file listed in a plan
    Apply {
        /// Plan file
        #[arg(short, long, default_value = PLAN_FILE_NAME)]
        plan: PathBuf,

        /// Dry run - show the change without writing
        #[arg(long)]
        dry_run: bool,

        /// Mint identifiers from a counter starting at SEED
        #[arg(long, hide = true)]
        seed: Option<u64>,
    },

    /// Print the manifest lines that mention a display name
    Show {
        /// project.pbxproj, or the .xcodeproj directory holding it
        manifest: PathBuf,

        /// Display name to look for
        name: String,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::Remove { .. } => "remove",
            Commands::Apply { .. } => "apply",
            Commands::Show { .. } => "show",
        }
    }
}
