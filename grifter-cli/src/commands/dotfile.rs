//! Dotfile command implementation.

use crate::error::CliError;
use crate::utils::{load_context, load_data, GlobalOptions};
use clap::Args;
use grifter::operations::{write_dotfile, DEFAULT_DOTFILE};
use std::path::PathBuf;

/// Write the unique connections as a graphviz file.
#[derive(Args)]
pub struct DotfileCommand {
    /// Guest data file (YAML, or JSON with a .json extension)
    #[arg(value_name = "DATAFILE")]
    pub datafile: PathBuf,

    /// File to write the graph to
    #[arg(long, short, value_name = "PATH", default_value = DEFAULT_DOTFILE)]
    pub output: PathBuf,
}

impl DotfileCommand {
    /// Execute the dotfile command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = load_context(global)?;
        let data = load_data(&self.datafile)?;

        let edges = write_dotfile(&data, &context, &self.output)?;
        if !global.quiet {
            eprintln!("Wrote {edges} edge(s) to {}", self.output.display());
        }
        Ok(())
    }
}
