//! Configuration schema definitions.
//!
//! The config document describes every supported box type: how its data
//! interfaces are named, how many NICs it can take, and which other box type
//! (if any) it must be deployed alongside.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The built-in config document.
pub const DEFAULT_CONFIG: &str = include_str!("../../data/config.yml");

/// The built-in base guest defaults.
pub const BASE_DEFAULTS: &str = include_str!("../../data/defaults.yml");

/// Example guest data document.
pub const EXAMPLE_GUESTS: &str = include_str!("../../data/guests-example.yml");

/// Example per-box defaults document.
pub const EXAMPLE_GROUPS: &str = include_str!("../../data/groups-example.yml");

/// Config file name searched for in each config directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Per-box defaults file name searched for in each config directory.
pub const GUEST_DEFAULTS_FILE_NAME: &str = "guest-defaults.yml";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use grifter::config::Config;
///
/// let config = Config::builtin().unwrap();
/// let veos = config.guest_config("arista/veos").unwrap();
/// assert_eq!(veos.data_interface_base, "eth");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Per-box interface settings, keyed by box name.
    pub guest_config: BTreeMap<String, GuestConfig>,

    /// Box types that must be deployed with a partner, keyed by box name.
    #[serde(default)]
    pub guest_pairs: BTreeMap<String, GuestPair>,
}

impl Config {
    /// Parses and validates the built-in config document.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded document is broken.
    pub fn builtin() -> crate::Result<Self> {
        let document = serde_yaml::from_str(DEFAULT_CONFIG)?;
        crate::config::ConfigValidator::into_config("built-in config", &document)
    }

    /// Looks up the settings for a box type.
    #[must_use]
    pub fn guest_config(&self, box_name: &str) -> Option<&GuestConfig> {
        self.guest_config.get(box_name)
    }

    /// Looks up the partner box type, if this box is one half of a pair.
    #[must_use]
    pub fn partner(&self, box_name: &str) -> Option<&str> {
        self.guest_pairs.get(box_name).map(|p| p.partner.as_str())
    }
}

/// Interface layout for one box type.
///
/// # Examples
///
/// ```
/// use grifter::config::GuestConfig;
///
/// let cfg = GuestConfig {
///     data_interface_base: "swp".to_string(),
///     data_interface_offset: 1,
///     internal_interfaces: 0,
///     max_data_interfaces: 52,
///     management_interface: "eth0".to_string(),
///     reserved_interfaces: 0,
/// };
/// assert_eq!(cfg.max_data_interfaces, 52);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GuestConfig {
    /// Prefix for data interface names (`eth`, `swp`, `ge-0/0/`).
    pub data_interface_base: String,

    /// Index of the first data interface.
    pub data_interface_offset: u32,

    /// Number of internal interfaces the box has.
    pub internal_interfaces: u32,

    /// Maximum number of data interfaces the box supports.
    pub max_data_interfaces: u32,

    /// Name of the management interface.
    pub management_interface: String,

    /// Number of reserved interfaces the box has.
    pub reserved_interfaces: u32,
}

/// Partner requirement for a box type.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GuestPair {
    /// The box type that must accompany this one.
    pub partner: String,
}
