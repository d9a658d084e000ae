//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, building the registry from it, and small output
//! helpers.

use crate::error::CliError;
use pathalias::path::StaticBaseUrl;
use pathalias::{Config, ConfigBuilder, InsertMode, Locator, DEFAULT_INSTANCE};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Override the root directory.
    pub root: Option<String>,

    /// Override the base URL.
    pub base_url: Option<String>,

    /// Extra `(alias, directory)` registrations.
    pub aliases: Vec<(String, String)>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files (or the single `--config` file)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref file) = global.config {
        builder = builder.with_file(file);
    }

    let overrides = Config {
        root: global.root.clone(),
        base_url: global.base_url.clone(),
        ..Default::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the default registry from configuration and `--alias` flags.
///
/// Flag aliases are prepended after the configuration is applied, so their
/// directories are searched first.
pub fn build_locator(config: &Config, global: &GlobalOptions) -> Result<Locator, CliError> {
    let mut locator = Locator::new(DEFAULT_INSTANCE)?;
    config.apply(&mut locator)?;

    for (alias, dir) in &global.aliases {
        locator.add([dir], alias, InsertMode::Prepend)?;
    }

    log::debug!("registered aliases: {:?}", locator.aliases());
    Ok(locator)
}

/// Load configuration and build the registry in one step.
pub fn load_locator(global: &GlobalOptions) -> Result<(Config, Locator), CliError> {
    let config = load_configuration(global)?;
    let locator = build_locator(&config, global)?;
    Ok((config, locator))
}

/// The configured base URL.
pub fn base_url(config: &Config) -> Result<StaticBaseUrl, CliError> {
    config
        .base_url
        .as_deref()
        .map(StaticBaseUrl::new)
        .ok_or_else(|| {
            CliError::InvalidArguments(
                "no base URL configured (use --base-url or PATHALIAS_BASE_URL)".to_string(),
            )
        })
}

/// Turn an alias name into a source string, accepting `assets` or `assets:`.
pub fn alias_source(alias: &str) -> String {
    if alias.contains(':') {
        alias.to_string()
    } else {
        format!("{alias}:")
    }
}
