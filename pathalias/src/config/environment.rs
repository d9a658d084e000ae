//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHALIAS_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides the root directory.
pub const ROOT_ENV: &str = "PATHALIAS_ROOT";

/// Overrides the base URL.
pub const BASE_URL_ENV: &str = "PATHALIAS_BASE_URL";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathalias::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `PATHALIAS_ROOT` and `PATHALIAS_BASE_URL` and applies them with
    /// higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an empty value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(root) = Self::read(ROOT_ENV)? {
            config.root = Some(root);
        }

        if let Some(base_url) = Self::read(BASE_URL_ENV)? {
            config.base_url = Some(base_url);
        }

        Ok(())
    }

    fn read(name: &str) -> Result<Option<String>> {
        match env::var(name) {
            Ok(value) if value.trim().is_empty() => Err(Error::Validation {
                field: name.into(),
                message: "Must not be empty".into(),
            }),
            Ok(value) => {
                log::debug!("{name} overrides configuration");
                Ok(Some(value))
            }
            Err(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var(ROOT_ENV);
        env::remove_var(BASE_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_apply_overrides_no_env_vars() {
        clear();
        let mut config = Config {
            root: Some("/srv/www".to_string()),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.root.as_deref(), Some("/srv/www"));
        assert_eq!(config.base_url, None);
    }

    #[test]
    #[serial]
    fn test_apply_overrides_replaces_values() {
        clear();
        env::set_var(ROOT_ENV, "/srv/env");
        env::set_var(BASE_URL_ENV, "https://env.example.test");

        let mut config = Config {
            root: Some("/srv/file".to_string()),
            ..Default::default()
        };
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear();

        result.unwrap();
        assert_eq!(config.root.as_deref(), Some("/srv/env"));
        assert_eq!(config.base_url.as_deref(), Some("https://env.example.test"));
    }

    #[test]
    #[serial]
    fn test_apply_overrides_rejects_empty() {
        clear();
        env::set_var(ROOT_ENV, "  ");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear();

        assert!(matches!(result, Err(Error::Validation { field, .. }) if field == ROOT_ENV));
    }
}
