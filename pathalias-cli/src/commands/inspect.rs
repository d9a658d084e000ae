//! Command to show how a reference is classified and resolved.

use crate::error::CliError;
use crate::utils::{load_locator, GlobalOptions};
use clap::Args;
use pathalias::path::normalize::prefix;
use pathalias::Reference;

/// Show how a reference is classified and resolved.
#[derive(Args)]
pub struct InspectCommand {
    /// Reference or path to inspect
    #[arg(value_name = "REF")]
    pub reference: String,
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, locator) = load_locator(global)?;
        let reference = locator.reference(&self.reference);

        println!("reference: {}", self.reference);
        println!("prefix:    {}", prefix(&self.reference).as_deref().unwrap_or("-"));
        println!("virtual:   {}", reference.is_virtual());
        if let Reference::Virtual { alias, subpath } = &reference {
            println!("alias:     {alias}");
            println!("subpath:   {subpath}");
        }
        println!(
            "resolved:  {}",
            locator.resolve(&self.reference).as_deref().unwrap_or("-")
        );

        Ok(())
    }
}
