//! Create command implementation.
//!
//! This module implements the `create` command, which runs the whole
//! pipeline over a guest data file and writes the resulting Vagrantfile.

use crate::error::CliError;
use crate::utils::{load_context, load_data, GlobalOptions};
use clap::Args;
use grifter::operations::{CreateOptions, CreatePlan};
use std::path::PathBuf;

/// Create a Vagrantfile from a guest data file.
#[derive(Args)]
pub struct CreateCommand {
    /// Guest data file (YAML, or JSON with a .json extension)
    #[arg(value_name = "DATAFILE")]
    pub datafile: PathBuf,

    /// Directory to write the Vagrantfile to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Template to render instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Print the Vagrantfile instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = load_context(global)?;
        let data = load_data(&self.datafile)?;

        let options = CreateOptions::new(&self.output_dir).with_template(self.template);
        let plan = CreatePlan::build(&data, &context, &options)?;

        if self.dry_run {
            print!("{}", plan.contents);
            return Ok(());
        }

        let outcome = plan.execute()?;
        if !global.quiet {
            if let Some(backup) = &outcome.backup {
                eprintln!("Previous Vagrantfile moved to {}", backup.display());
            }
            eprintln!(
                "Wrote {} with {} guest(s)",
                outcome.path.display(),
                plan.guest_count
            );
        }
        Ok(())
    }
}
