//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CleanCommand, InspectCommand, PathsCommand, ResolveCommand, UriCommand, UrnCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving alias-qualified paths.
#[derive(Parser)]
#[command(name = "pathalias")]
#[command(version, about = "Resolve alias-qualified path references", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file instead of discovering one
    #[arg(long, value_name = "FILE", global = true, env = "PATHALIAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the root directory
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<String>,

    /// Override the base URL used for URIs
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Register DIR under alias NAME (repeatable, searched first)
    #[arg(
        long = "alias",
        value_name = "NAME=DIR",
        global = true,
        value_parser = parse_alias
    )]
    pub aliases: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Find the first existing file for a reference
    Resolve(ResolveCommand),

    /// List the directories registered for an alias
    Paths(PathsCommand),

    /// Build the absolute URL of a reference
    Uri(UriCommand),

    /// Show the root-relative path of a reference
    Urn(UrnCommand),

    /// Normalize a path string
    Clean(CleanCommand),

    /// Show how a reference is classified and resolved
    Inspect(InspectCommand),

    /// Validate the configuration
    Validate(ValidateCommand),
}

/// Parse a `NAME=DIR` alias definition.
fn parse_alias(value: &str) -> Result<(String, String), String> {
    let (name, dir) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=DIR, got '{value}'"))?;

    if name.is_empty() || dir.is_empty() {
        return Err(format!("expected NAME=DIR, got '{value}'"));
    }

    Ok((name.to_string(), dir.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_alias() {
        assert_eq!(
            parse_alias("assets=/srv/www/assets").unwrap(),
            ("assets".to_string(), "/srv/www/assets".to_string())
        );
        assert_eq!(
            parse_alias("win=C:/a=b").unwrap(),
            ("win".to_string(), "C:/a=b".to_string())
        );
        assert!(parse_alias("assets").is_err());
        assert!(parse_alias("=/srv").is_err());
        assert!(parse_alias("assets=").is_err());
    }

    #[test]
    fn test_repeated_alias_flags() {
        let cli = Cli::try_parse_from([
            "pathalias",
            "--alias",
            "assets=/a",
            "--alias",
            "assets=/b",
            "resolve",
            "assets:x",
        ])
        .unwrap();
        assert_eq!(cli.aliases.len(), 2);
    }
}
