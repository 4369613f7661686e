//! Command to validate a guest data file.

use crate::error::CliError;
use crate::utils::{load_context, load_data, GlobalOptions};
use clap::Args;
use grifter::Topology;
use std::path::PathBuf;

/// Validate a guest data file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Guest data file (YAML, or JSON with a .json extension)
    #[arg(value_name = "DATAFILE")]
    pub datafile: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    ///
    /// Runs schema, merge and cross-reference checks; nothing is written.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = load_context(global)?;
        let data = load_data(&self.datafile)?;

        let topology = Topology::build(&data, &context)?;
        println!(
            "{} is valid ({} guest(s))",
            self.datafile.display(),
            topology.guests().len()
        );
        Ok(())
    }
}
