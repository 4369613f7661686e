//! Main entry point for the grifter CLI.
//!
//! This is the command-line interface for generating Vagrantfiles from
//! YAML network topology descriptions:
//! - `create`: Render and write a Vagrantfile
//! - `example`: Print example and default documents
//! - `connections`: List the links between guests
//! - `dotfile`: Write the links as a graphviz file
//! - `validate`: Check a guest data file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    grifter::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        quiet: cli.quiet,
        config: cli.config,
        guest_defaults: cli.guest_defaults,
    };

    let result = match cli.command {
        cli::Command::Create(cmd) => cmd.execute(&global),
        cli::Command::Example(cmd) => cmd.execute(&global),
        cli::Command::Connections(cmd) => cmd.execute(&global),
        cli::Command::Dotfile(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
