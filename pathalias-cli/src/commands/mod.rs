//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Find the first existing file for a reference
//! - `paths`: List the directories registered for an alias
//! - `uri`: Build the absolute URL of a reference
//! - `urn`: Show the root-relative path of a reference
//! - `clean`: Normalize a path string
//! - `inspect`: Show how a reference is classified and resolved
//! - `validate`: Validate configuration

pub mod clean;
pub mod inspect;
pub mod paths;
pub mod resolve;
pub mod uri;
pub mod urn;
pub mod validate;

pub use clean::CleanCommand;
pub use inspect::InspectCommand;
pub use paths::PathsCommand;
pub use resolve::ResolveCommand;
pub use uri::UriCommand;
pub use urn::UrnCommand;
pub use validate::ValidateCommand;
