//! Error types for the pathalias library.
//!
//! Only configuration misuse is an error here: a too-short alias, an empty
//! instance key, a missing root directory. Lookup misses (unknown alias,
//! missing file, unresolvable `..` path) are reported as `None` or an empty
//! string by the operations themselves.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathalias error.
///
/// # Examples
///
/// ```
/// use pathalias::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("default")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathalias library.
#[derive(Debug, Error)]
pub enum Error {
    /// An alias name was rejected.
    #[error("invalid alias '{alias}': {reason}")]
    InvalidAlias {
        /// The rejected alias.
        alias: String,
        /// The reason the alias is invalid.
        reason: String,
    },

    /// An empty instance key was requested.
    #[error("invalid instance key: key must not be empty")]
    InvalidInstanceKey,

    /// The directory passed as root does not exist.
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// An operation needed the root directory before it was set.
    #[error("root directory is not set")]
    RootNotSet,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if the error comes from misusing the registry rather than from
    /// loading configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathalias::Error;
    ///
    /// assert!(Error::RootNotSet.is_registry_misuse());
    /// assert!(!Error::Validation {
    ///     field: "root".into(),
    ///     message: "bad".into(),
    /// }
    /// .is_registry_misuse());
    /// ```
    #[must_use]
    pub fn is_registry_misuse(&self) -> bool {
        matches!(
            self,
            Self::InvalidAlias { .. }
                | Self::InvalidInstanceKey
                | Self::DirectoryNotFound { .. }
                | Self::RootNotSet
        )
    }
}
