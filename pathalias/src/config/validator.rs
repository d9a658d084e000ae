//! Configuration validation.
//!
//! Checks a merged configuration before any of it is registered, so that a
//! bad file is reported with the offending field instead of failing halfway
//! through registration.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::registry::MIN_ALIAS_LENGTH;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathalias::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref root) = config.root {
            Self::validate_non_empty("root", root)?;
        }

        if let Some(ref base_url) = config.base_url {
            Self::validate_base_url(base_url)?;
        }

        for (alias, entry) in &config.aliases {
            let field = format!("aliases.{alias}");
            if alias.len() < MIN_ALIAS_LENGTH {
                return Err(Error::Validation {
                    field,
                    message: format!("Alias must be at least {MIN_ALIAS_LENGTH} bytes long"),
                });
            }

            if entry.paths().is_empty() {
                return Err(Error::Validation {
                    field,
                    message: "At least one path is required".into(),
                });
            }

            for (i, path) in entry.paths().iter().enumerate() {
                Self::validate_non_empty(&format!("{field}[{i}]"), path)?;
            }
        }

        Ok(())
    }

    fn validate_non_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    /// Base URLs need an http(s) scheme and a host.
    fn validate_base_url(base_url: &str) -> Result<()> {
        let host = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"))
            .ok_or_else(|| Error::Validation {
                field: "base_url".into(),
                message: format!("Must start with http:// or https://: {base_url}"),
            })?;

        if host.trim_end_matches('/').is_empty() {
            return Err(Error::Validation {
                field: "base_url".into(),
                message: "Missing host".into(),
            });
        }

        Ok(())
    }
}
