//! Connection listing and graph export.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::context::Context;
use crate::error::Result;
use crate::output::ConnectionFormat;
use crate::topology::Topology;

/// Default file name for the graph export.
pub const DEFAULT_DOTFILE: &str = "topology.dot";

/// Options for listing connections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionsOptions {
    /// List each reciprocal link once.
    pub unique: bool,
    /// Output format.
    pub format: ConnectionFormat,
}

impl ConnectionsOptions {
    /// Sets the unique flag.
    #[must_use]
    pub const fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_format(mut self, format: ConnectionFormat) -> Self {
        self.format = format;
        self
    }
}

/// Validates the data and formats its connection list.
///
/// # Errors
///
/// Returns any validation or formatting error.
///
/// # Examples
///
/// ```
/// use grifter::operations::{list_connections, ConnectionsOptions};
/// use grifter::Context;
///
/// let data: serde_yaml::Value = serde_yaml::from_str(grifter::config::schema::EXAMPLE_GUESTS).unwrap();
/// let options = ConnectionsOptions::default().with_unique(true);
/// let text = list_connections(&data, &Context::builtin().unwrap(), options).unwrap();
/// assert_eq!(text, "sw01-eth1 <--> sw02-eth1\nsw01-eth2 <--> sw02-eth2\n");
/// ```
pub fn list_connections(
    document: &Value,
    context: &Context,
    options: ConnectionsOptions,
) -> Result<String> {
    let topology = Topology::build(document, context)?;
    let connections = topology.connections(context, options.unique)?;
    options.format.create_formatter().format(&connections)
}

/// Writes the unique connection list as a graphviz file.
///
/// Returns the number of edges written.
///
/// # Errors
///
/// Returns any validation error, or an I/O error if the file cannot be
/// written.
pub fn write_dotfile(document: &Value, context: &Context, path: &Path) -> Result<usize> {
    let topology = Topology::build(document, context)?;
    let connections = topology.connections(context, true)?;
    let contents = ConnectionFormat::Dot
        .create_formatter()
        .format(&connections)?;
    fs::write(path, contents)?;
    log::info!("wrote {} edges to {}", connections.len(), path.display());
    Ok(connections.len())
}
