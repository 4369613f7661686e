//! Interface naming and padding.
//!
//! Every box type exposes three kinds of interface: data ports wired to other
//! guests, internal ports wired inside a multi-VM box, and reserved ports that
//! must exist but carry nothing. Each kind has its own index-to-name map and
//! its own UDP tunnel port base.

pub mod map;
pub mod padding;

#[cfg(test)]
mod proptests;

use std::fmt;

use serde::Serialize;

pub use map::{int_to_port_map, InterfaceMap, InterfaceMaps, PortMap};
pub use padding::{pad_interfaces, update_guest_interfaces};

/// Tunnel port base for data interfaces.
pub const DATA_PORT_BASE: u32 = 10_000;

/// Tunnel port base for internal interfaces.
pub const INTERNAL_PORT_BASE: u32 = 11_000;

/// Tunnel port base for reserved interfaces.
pub const RESERVED_PORT_BASE: u32 = 12_000;

/// Name prefix for internal interfaces.
pub const INTERNAL_INTERFACE_PREFIX: &str = "internal-";

/// Name prefix for reserved interfaces.
pub const RESERVED_INTERFACE_PREFIX: &str = "reserved-";

/// The category an interface belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    /// Box-internal link.
    Internal,
    /// Unused but required port.
    Reserved,
    /// Guest-to-guest link.
    Data,
}

impl InterfaceKind {
    /// UDP tunnel port base for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use grifter::interface::InterfaceKind;
    ///
    /// assert_eq!(InterfaceKind::Data.base_port(), 10000);
    /// ```
    #[must_use]
    pub const fn base_port(self) -> u32 {
        match self {
            Self::Data => DATA_PORT_BASE,
            Self::Internal => INTERNAL_PORT_BASE,
            Self::Reserved => RESERVED_PORT_BASE,
        }
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data => write!(f, "data"),
            Self::Internal => write!(f, "internal"),
            Self::Reserved => write!(f, "reserved"),
        }
    }
}
