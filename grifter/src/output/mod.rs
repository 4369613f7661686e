//! Output formatting for connection lists.
//!
//! Connections can be printed as plain text lines, as a graphviz `graph`
//! document, or as JSON.

mod formatters;
pub mod natural;

#[cfg(test)]
mod proptests;

use crate::connections::Connection;
use crate::Result;

pub use formatters::{DotFormatter, JsonFormatter, PlainFormatter, DOT_GRAPH_NAME};

/// Trait for formatting connection lists into different output formats.
pub trait ConnectionFormatter {
    /// Format the given connections, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, connections: &[Connection]) -> Result<String>;
}

/// Available output formats for connection lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ConnectionFormat {
    /// `A-portA <--> B-portB` lines.
    #[default]
    Plain,
    /// Graphviz undirected graph.
    Dot,
    /// JSON array.
    Json,
}

impl ConnectionFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn ConnectionFormatter> {
        match self {
            Self::Plain => Box::new(PlainFormatter),
            Self::Dot => Box::new(DotFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
