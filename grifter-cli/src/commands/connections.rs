//! Connections command implementation.
//!
//! Prints the naturally sorted list of links between guests.

use crate::error::CliError;
use crate::utils::{load_context, load_data, GlobalOptions};
use clap::Args;
use grifter::operations::{list_connections, ConnectionsOptions};
use grifter::ConnectionFormat;
use std::path::PathBuf;

/// List the connections between guests.
#[derive(Args)]
pub struct ConnectionsCommand {
    /// Guest data file (YAML, or JSON with a .json extension)
    #[arg(value_name = "DATAFILE")]
    pub datafile: PathBuf,

    /// List each link once instead of once per side
    #[arg(long)]
    pub unique: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: ConnectionFormat,
}

impl ConnectionsCommand {
    /// Execute the connections command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = load_context(global)?;
        let data = load_data(&self.datafile)?;

        let options = ConnectionsOptions::default()
            .with_unique(self.unique)
            .with_format(self.format);
        print!("{}", list_connections(&data, &context, options)?);
        Ok(())
    }
}
