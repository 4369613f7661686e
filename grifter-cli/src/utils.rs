//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared across CLI commands: building
//! the run context from the global options and loading the guest data file.

use crate::error::CliError;
use grifter::config::ConfigLoader;
use grifter::{Context, ContextBuilder, Error as LibError};
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit config file.
    pub config: Option<PathBuf>,

    /// Explicit guest defaults file.
    pub guest_defaults: Option<PathBuf>,
}

/// Build the context for this invocation.
///
/// Explicit files from the global options bypass the directory search.
/// Any failure is reported as a configuration error.
pub fn load_context(global: &GlobalOptions) -> Result<Context, CliError> {
    let mut builder = ContextBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }
    if let Some(ref path) = global.guest_defaults {
        builder = builder.with_guest_defaults_file(path);
    }
    builder.build().map_err(CliError::Config)
}

/// Load the guest data file.
///
/// A file that does not exist or cannot be read is an argument error rather
/// than an I/O error.
pub fn load_data(path: &Path) -> Result<Value, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "Data file not found: {}",
            path.display()
        )));
    }
    log::debug!("loading guest data from {}", path.display());
    ConfigLoader::load_file(path).map_err(|e| match e {
        LibError::InvalidPath { .. } => CliError::InvalidArguments(e.to_string()),
        other => CliError::from(other),
    })
}
