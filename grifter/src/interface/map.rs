//! Index-to-name maps for each box type.

use std::collections::BTreeMap;

use crate::config::{Config, GuestConfig};
use crate::interface::{InterfaceKind, INTERNAL_INTERFACE_PREFIX, RESERVED_INTERFACE_PREFIX};

/// Interface index to interface name.
pub type PortMap = BTreeMap<u32, String>;

/// Builds a map of `count` consecutive indices starting at `offset`.
///
/// # Examples
///
/// ```
/// use grifter::interface::int_to_port_map;
///
/// let map = int_to_port_map("swp", 1, 3);
/// assert_eq!(map.len(), 3);
/// assert_eq!(map[&1], "swp1");
/// assert_eq!(map[&3], "swp3");
/// assert!(int_to_port_map("eth", 0, 0).is_empty());
/// ```
#[must_use]
pub fn int_to_port_map(prefix: &str, offset: u32, count: u32) -> PortMap {
    (offset..offset.saturating_add(count))
        .map(|i| (i, format!("{prefix}{i}")))
        .collect()
}

/// All interface names for one box type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceMap {
    /// Data interface names.
    pub data: PortMap,
    /// Internal interface names, indexed from 1.
    pub internal: PortMap,
    /// Reserved interface names, indexed from 1.
    pub reserved: PortMap,
    /// Index of the first data interface.
    pub data_offset: u32,
    /// Management interface name.
    pub management: String,
}

impl InterfaceMap {
    /// Builds the maps for one box type.
    ///
    /// # Examples
    ///
    /// ```
    /// use grifter::config::Config;
    /// use grifter::interface::InterfaceMap;
    ///
    /// let config = Config::builtin().unwrap();
    /// let map = InterfaceMap::build(config.guest_config("juniper/vmx-vfp").unwrap());
    /// assert_eq!(map.data[&0], "ge-0/0/0");
    /// assert_eq!(map.internal[&1], "internal-1");
    /// ```
    #[must_use]
    pub fn build(config: &GuestConfig) -> Self {
        Self {
            data: int_to_port_map(
                &config.data_interface_base,
                config.data_interface_offset,
                config.max_data_interfaces,
            ),
            internal: int_to_port_map(INTERNAL_INTERFACE_PREFIX, 1, config.internal_interfaces),
            reserved: int_to_port_map(RESERVED_INTERFACE_PREFIX, 1, config.reserved_interfaces),
            data_offset: config.data_interface_offset,
            management: config.management_interface.clone(),
        }
    }

    /// The map for one interface kind.
    #[must_use]
    pub fn ports(&self, kind: InterfaceKind) -> &PortMap {
        match kind {
            InterfaceKind::Data => &self.data,
            InterfaceKind::Internal => &self.internal,
            InterfaceKind::Reserved => &self.reserved,
        }
    }

    /// The name of an interface, if the index is mapped.
    #[must_use]
    pub fn port_name(&self, kind: InterfaceKind, index: u32) -> Option<&str> {
        self.ports(kind).get(&index).map(String::as_str)
    }
}

/// Interface maps for every configured box type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceMaps(BTreeMap<String, InterfaceMap>);

impl InterfaceMaps {
    /// Builds maps for every box in the config.
    #[must_use]
    pub fn build(config: &Config) -> Self {
        Self(
            config
                .guest_config
                .iter()
                .map(|(name, cfg)| (name.clone(), InterfaceMap::build(cfg)))
                .collect(),
        )
    }

    /// The maps for one box type.
    #[must_use]
    pub fn get(&self, box_name: &str) -> Option<&InterfaceMap> {
        self.0.get(box_name)
    }

    /// Number of box types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no box types are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
