//! Command to normalize a path string.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathalias::path::normalize::{clean, SEPARATOR};

/// Normalize separators and `.`/`..` segments of a path.
///
/// Works on the string alone; the filesystem is not consulted.
#[derive(Args)]
pub struct CleanCommand {
    /// Path to clean
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Separator to use in the output
    #[arg(long, default_value_t = SEPARATOR)]
    pub separator: char,
}

impl CleanCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.separator != '/' && self.separator != '\\' {
            return Err(CliError::InvalidArguments(format!(
                "separator must be '/' or '\\', got '{}'",
                self.separator
            )));
        }

        println!("{}", clean(&self.path, self.separator));
        Ok(())
    }
}
