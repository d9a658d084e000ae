//! Main entry point for the pathalias CLI.
//!
//! This is the command-line interface for alias-qualified path resolution.
//! It provides commands for inspecting a configured registry:
//! - `resolve`: Find the file a reference points to
//! - `paths`: List the directories registered for an alias
//! - `uri` / `urn`: Build URLs and root-relative paths
//! - `clean`: Normalize a path string
//! - `inspect`: Show how a reference is classified
//! - `validate`: Check the configuration

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = pathalias::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        root: cli.root,
        base_url: cli.base_url,
        aliases: cli.aliases,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Paths(cmd) => cmd.execute(&global),
        cli::Command::Uri(cmd) => cmd.execute(&global),
        cli::Command::Urn(cmd) => cmd.execute(&global),
        cli::Command::Clean(cmd) => cmd.execute(&global),
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
