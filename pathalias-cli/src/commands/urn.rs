//! Command to show the root-relative path of a reference.

use crate::error::CliError;
use crate::utils::{load_locator, GlobalOptions};
use clap::Args;

/// Show the root-relative path of a reference.
#[derive(Args)]
pub struct UrnCommand {
    /// Reference or path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Fail unless a literal path exists on disk
    #[arg(long)]
    pub must_exist: bool,
}

impl UrnCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, locator) = load_locator(global)?;

        let urn = locator.urn(&self.path, self.must_exist)?;
        if urn.is_empty() {
            return Err(CliError::NotFound(format!("Not found: {}", self.path)));
        }

        println!("{urn}");
        Ok(())
    }
}
