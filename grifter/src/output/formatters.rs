//! Connection formatter implementations.

use crate::connections::Connection;
use crate::Result;

use super::ConnectionFormatter;

/// Name of the graph in dot output.
pub const DOT_GRAPH_NAME: &str = "network";

/// One `A-portA <--> B-portB` line per connection.
pub struct PlainFormatter;

impl ConnectionFormatter for PlainFormatter {
    fn format(&self, connections: &[Connection]) -> Result<String> {
        let mut output = String::new();
        for connection in connections {
            output.push_str(&connection.to_string());
            output.push('\n');
        }
        Ok(output)
    }
}

/// An undirected graphviz graph with one edge per connection.
///
/// Node names and ports are quoted, so interface names containing `/` or `-`
/// need no escaping beyond double quotes.
pub struct DotFormatter;

impl DotFormatter {
    /// The edge statement for one connection.
    ///
    /// # Examples
    ///
    /// ```
    /// use grifter::output::DotFormatter;
    /// use grifter::Connection;
    ///
    /// let edge = DotFormatter::edge(&Connection::new("sw01", "eth1", "sw02", "eth1"));
    /// assert_eq!(edge, r#""sw01":"eth1" -- "sw02":"eth1";"#);
    /// ```
    #[must_use]
    pub fn edge(connection: &Connection) -> String {
        format!(
            "{}:{} -- {}:{};",
            quote(&connection.local_guest),
            quote(&connection.local_port),
            quote(&connection.remote_guest),
            quote(&connection.remote_port)
        )
    }
}

impl ConnectionFormatter for DotFormatter {
    fn format(&self, connections: &[Connection]) -> Result<String> {
        let mut output = format!("graph {DOT_GRAPH_NAME} {{\n");
        for connection in connections {
            output.push_str("  ");
            output.push_str(&Self::edge(connection));
            output.push('\n');
        }
        output.push_str("}\n");
        Ok(output)
    }
}

/// A JSON array of connection objects.
pub struct JsonFormatter;

impl ConnectionFormatter for JsonFormatter {
    fn format(&self, connections: &[Connection]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(connections)?;
        output.push('\n');
        Ok(output)
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
