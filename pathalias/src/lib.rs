#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathalias
//!
//! Alias-qualified path resolution.
//!
//! Register one or more directories under an alias, then refer to files as
//! `alias:sub/path`. Lookups search the alias's directories in order and
//! return the first existing match. A root directory turns resolved paths
//! into root-relative URNs and, with a base URL, into absolute URIs.
//!
//! ## Core Types
//!
//! - [`Locator`]: one registry of aliases with an optional root
//! - [`Instances`]: registries keyed by name
//! - [`InsertMode`] and [`AliasTable`]: how directories are ordered per alias
//! - [`Reference`]: a classified virtual or literal path
//! - [`UriBuilder`]: absolute URLs from references
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathalias::{InsertMode, Locator};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::create_dir(dir.path().join("css")).unwrap();
//! std::fs::write(dir.path().join("css/app.css"), "").unwrap();
//! let base = dir.path().to_str().unwrap();
//!
//! let mut locator = Locator::new("default").unwrap();
//! locator.add([base], "assets", InsertMode::Prepend).unwrap();
//!
//! let found = locator.get("assets:css/app.css").unwrap();
//! assert!(found.ends_with("/css/app.css"));
//! assert_eq!(locator.get("assets:css/missing.css"), None);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod registry;
pub mod resolver;
pub mod uri;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Reference, DEFAULT_ALIAS};
pub use registry::{AliasTable, InsertMode, Instances, Locator, DEFAULT_INSTANCE, MIN_ALIAS_LENGTH};
pub use uri::UriBuilder;
