//! Configuration system for pathalias.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHALIAS_*`)
//! 3. Private project config (`pathalias.local.yaml`)
//! 4. Project config (`pathalias.yaml`)
//! 5. User config (`~/.pathalias/config.yaml`)
//!
//! A file given with `ConfigBuilder::with_file` replaces levels 3 to 5.
//!
//! # File Format
//!
//! ```yaml
//! root: /srv/www
//! base_url: https://example.test
//! aliases:
//!   assets:
//!     - /srv/www/assets
//!     - /srv/shared/assets
//!   styles:
//!     paths: ["assets:css"]
//!     mode: append
//! ```
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use pathalias::config::ConfigBuilder;
//! use pathalias::Locator;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! let mut locator = Locator::new("default").unwrap();
//! config.apply(&mut locator).unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{AliasEntry, AliasSpec, Config};
pub use validator::ConfigValidator;
