//! Command to validate pathalias configuration.

use crate::error::CliError;
use crate::utils::{build_locator, load_configuration, GlobalOptions};
use clap::Args;
use pathalias::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a configuration file, or the merged configuration.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (defaults to the discovered configuration)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::InvalidArguments(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }

                let config = ConfigLoader::load_file(&path)
                    .map_err(|e| CliError::Config(e.to_string()))?;
                ConfigValidator::validate(&config)
                    .map_err(|e| CliError::Config(e.to_string()))?;
            }
            None => {
                // Building the registry also checks the root and alias names.
                let config = load_configuration(global)?;
                build_locator(&config, global)
                    .map_err(|e| CliError::Config(e.to_string()))?;
            }
        }

        println!("Configuration is valid");
        Ok(())
    }
}
