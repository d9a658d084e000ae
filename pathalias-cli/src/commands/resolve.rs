//! Command to find the file a reference points to.

use crate::error::CliError;
use crate::utils::{load_locator, GlobalOptions};
use clap::Args;

/// Find the first existing file for a reference.
#[derive(Args)]
pub struct ResolveCommand {
    /// Reference to resolve (`alias:sub/path`, or a path under `default`)
    #[arg(value_name = "REF")]
    pub reference: String,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, locator) = load_locator(global)?;

        match locator.get(&self.reference) {
            Some(path) => {
                println!("{path}");
                Ok(())
            }
            None => Err(CliError::NotFound(format!(
                "Not found: {}",
                self.reference
            ))),
        }
    }
}
