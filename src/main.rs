//! pbxedit CLI - register source files in Xcode project manifests
//!
//! Usage: pbxedit <COMMAND>
//!
//! Commands:
//!   add     Register source files with a target and a group
//!   remove  Remove every line mentioning the given display names
//!   apply   Register every file listed in a plan
//!   show    Print the manifest lines that mention a display name

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::{Cli, Commands};
use commands::add::AddArgs;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let command = cli.command.name();

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json, Some(command));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        json,
        verbose,
        command,
    } = cli;

    match command {
        Commands::Add {
            manifest,
            files,
            name,
            target,
            target_id,
            group,
            anchor,
            text_duplicates,
            dry_run,
            seed,
        } => commands::add::cmd_add(
            AddArgs {
                manifest,
                files,
                name,
                target,
                target_id,
                group,
                anchor,
                text_duplicates,
                dry_run,
                seed,
            },
            json,
            verbose,
        ),
        Commands::Remove {
            manifest,
            names,
            dry_run,
        } => commands::remove::cmd_remove(&manifest, &names, dry_run, json, verbose),
        Commands::Apply {
            plan,
            dry_run,
            seed,
        } => commands::apply::cmd_apply(&plan, dry_run, seed, json, verbose),
        Commands::Show { manifest, name } => commands::show::cmd_show(&manifest, &name, json),
    }
}
