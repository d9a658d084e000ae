//! Paths command implementation.
//!
//! This module implements the `paths` command, which lists the directories
//! registered for an alias with their slot indices.

use crate::error::CliError;
use crate::utils::{alias_source, load_locator, GlobalOptions};
use clap::{Args, ValueEnum};
use pathalias::DEFAULT_ALIAS;
use serde::Serialize;

/// List the directories registered for an alias.
#[derive(Args)]
pub struct PathsCommand {
    /// Alias to list (defaults to `default`)
    #[arg(value_name = "ALIAS")]
    pub alias: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the paths command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `index<TAB>path` line per entry
    Text,
    /// JSON array of `{index, path}` objects
    Json,
}

/// One registered directory.
#[derive(Serialize)]
struct Entry {
    index: usize,
    path: String,
}

impl PathsCommand {
    /// Execute the paths command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, locator) = load_locator(global)?;

        let source = alias_source(self.alias.as_deref().unwrap_or(DEFAULT_ALIAS));
        let entries: Vec<Entry> = locator
            .entries(&source)
            .into_iter()
            .map(|(index, path)| Entry { index, path })
            .collect();

        match self.format {
            OutputFormat::Text => {
                for entry in &entries {
                    println!("{}\t{}", entry.index, entry.path);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&entries).map_err(|e| {
                    CliError::InvalidArguments(format!("Failed to serialize paths: {e}"))
                })?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
