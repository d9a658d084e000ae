//! Command to build the absolute URL of a reference.

use crate::error::CliError;
use crate::utils::{base_url, load_locator, GlobalOptions};
use clap::Args;
use pathalias::UriBuilder;

/// Build the absolute URL of a reference.
#[derive(Args)]
pub struct UriCommand {
    /// Reference or path, optionally followed by `?query`
    #[arg(value_name = "REF")]
    pub reference: String,
}

impl UriCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, locator) = load_locator(global)?;
        let base = base_url(&config)?;

        match UriBuilder::new(&locator, &base).uri(&self.reference)? {
            Some(uri) => {
                println!("{uri}");
                Ok(())
            }
            None => Err(CliError::NotFound(format!(
                "No URL for {} under root {}",
                self.reference,
                locator.root()?
            ))),
        }
    }
}
