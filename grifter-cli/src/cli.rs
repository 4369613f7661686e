//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ConnectionsCommand, CreateCommand, DotfileCommand, ExampleCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for generating Vagrantfiles from network topologies.
#[derive(Parser)]
#[command(name = "grifter")]
#[command(
    version,
    about = "Generate Vagrantfiles for virtual network topologies",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this config file instead of searching for config.yml
    #[arg(long, value_name = "PATH", global = true, env = "GRIFTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use this guest defaults file instead of searching for guest-defaults.yml
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        env = "GRIFTER_GUEST_DEFAULTS"
    )]
    pub guest_defaults: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a Vagrantfile from a guest data file
    Create(CreateCommand),

    /// Print example and default documents
    Example(ExampleCommand),

    /// List the connections between guests
    Connections(ConnectionsCommand),

    /// Write the connections as a graphviz file
    Dotfile(DotfileCommand),

    /// Validate a guest data file without writing anything
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
