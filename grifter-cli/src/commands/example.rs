//! Command to print the example and built-in documents.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{ArgGroup, Args};
use grifter::config::schema::{BASE_DEFAULTS, DEFAULT_CONFIG, EXAMPLE_GROUPS, EXAMPLE_GUESTS};

/// Print example and default documents.
#[derive(Args)]
#[command(group(
    ArgGroup::new("document")
        .required(true)
        .args(["guest", "group", "default_config", "defaults"])
))]
pub struct ExampleCommand {
    /// Example guest data file
    #[arg(long)]
    pub guest: bool,

    /// Example guest defaults file with per-box groups
    #[arg(long)]
    pub group: bool,

    /// The built-in config
    #[arg(long)]
    pub default_config: bool,

    /// The built-in base guest defaults
    #[arg(long)]
    pub defaults: bool,
}

impl ExampleCommand {
    /// Execute the example command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        print!("{}", self.document());
        Ok(())
    }

    fn document(&self) -> &'static str {
        if self.guest {
            EXAMPLE_GUESTS
        } else if self.group {
            EXAMPLE_GROUPS
        } else if self.default_config {
            DEFAULT_CONFIG
        } else {
            BASE_DEFAULTS
        }
    }
}
