//! Guest-to-guest links derived from data interface declarations.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::guest::Guests;
use crate::interface::{InterfaceKind, InterfaceMaps};
use crate::output::natural::natural_cmp;

/// One link between two named interfaces.
///
/// # Examples
///
/// ```
/// use grifter::Connection;
///
/// let c = Connection::new("sw01", "eth1", "sw02", "eth1");
/// assert_eq!(c.to_string(), "sw01-eth1 <--> sw02-eth1");
/// assert_eq!(c.reversed().to_string(), "sw02-eth1 <--> sw01-eth1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Connection {
    /// Guest declaring the link.
    pub local_guest: String,
    /// Interface name on the declaring guest.
    pub local_port: String,
    /// Guest at the far end.
    pub remote_guest: String,
    /// Interface name on the far guest.
    pub remote_port: String,
}

impl Connection {
    /// Creates a connection.
    #[must_use]
    pub fn new(
        local_guest: impl Into<String>,
        local_port: impl Into<String>,
        remote_guest: impl Into<String>,
        remote_port: impl Into<String>,
    ) -> Self {
        Self {
            local_guest: local_guest.into(),
            local_port: local_port.into(),
            remote_guest: remote_guest.into(),
            remote_port: remote_port.into(),
        }
    }

    /// The same link seen from the other end.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(
            self.remote_guest.clone(),
            self.remote_port.clone(),
            self.local_guest.clone(),
            self.local_port.clone(),
        )
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} <--> {}-{}",
            self.local_guest, self.local_port, self.remote_guest, self.remote_port
        )
    }
}

/// Lists every link declared in the guests' data interfaces.
///
/// Blackhole interfaces are not links and are skipped. With `unique`, a link
/// declared from both ends is listed once, in the orientation seen first.
/// The result is in natural order of its plain rendering.
///
/// # Errors
///
/// Returns a validation error if an interface index has no name for its box;
/// guests are expected to have passed cross-reference validation.
pub fn derive_connections(
    guests: &Guests,
    maps: &InterfaceMaps,
    unique: bool,
) -> Result<Vec<Connection>> {
    let mut connections = Vec::new();
    let mut seen = HashSet::new();

    for guest in guests {
        for iface in guest.data_interfaces.iter().filter(|i| !i.is_blackhole()) {
            let remote_box = guests
                .get(&iface.remote_guest)
                .map(|remote| remote.box_name())
                .unwrap_or_default();

            let connection = Connection::new(
                guest.name.clone(),
                port_name(maps, &guest.name, guest.box_name(), iface.local_port)?,
                iface.remote_guest.clone(),
                port_name(maps, &iface.remote_guest, remote_box, iface.remote_port)?,
            );

            if unique {
                if seen.contains(&connection.reversed()) {
                    continue;
                }
                seen.insert(connection.clone());
            }
            connections.push(connection);
        }
    }

    connections.sort_by(|a, b| natural_cmp(&a.to_string(), &b.to_string()));
    Ok(connections)
}

fn port_name(maps: &InterfaceMaps, guest: &str, box_name: &str, index: u32) -> Result<String> {
    maps.get(box_name)
        .and_then(|map| map.port_name(InterfaceKind::Data, index))
        .map(str::to_string)
        .ok_or_else(|| Error::Validation {
            field: guest.to_string(),
            message: format!("data interface {index} has no name for box type '{box_name}'"),
        })
}
