//! Guest data model.
//!
//! A guest is one virtual device in the generated topology. Guests are parsed
//! from the user's data document after defaults have been merged in, then
//! updated in place by the interface and storage steps.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::ResolvedVolume;

/// Remote guest name used for placeholder interfaces.
pub const BLACKHOLE: &str = "blackhole";

/// Remote port index used for placeholder interfaces.
pub const BLACKHOLE_PORT: u32 = 666;

/// One side of a point-to-point link, as declared on the local guest.
///
/// # Examples
///
/// ```
/// use grifter::Interface;
///
/// let bh = Interface::blackhole(3);
/// assert!(bh.is_blackhole());
/// assert_eq!(bh.remote_port, 666);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interface {
    /// Port index on the local guest.
    pub local_port: u32,
    /// Name of the guest at the far end, or [`BLACKHOLE`].
    pub remote_guest: String,
    /// Port index on the remote guest.
    pub remote_port: u32,
}

impl Interface {
    /// Creates an interface wired to another guest.
    #[must_use]
    pub fn new(local_port: u32, remote_guest: impl Into<String>, remote_port: u32) -> Self {
        Self {
            local_port,
            remote_guest: remote_guest.into(),
            remote_port,
        }
    }

    /// Creates a placeholder interface with no real remote endpoint.
    #[must_use]
    pub fn blackhole(local_port: u32) -> Self {
        Self::new(local_port, BLACKHOLE, BLACKHOLE_PORT)
    }

    /// Returns `true` if the interface has no real remote endpoint.
    #[must_use]
    pub fn is_blackhole(&self) -> bool {
        self.remote_guest == BLACKHOLE
    }
}

/// Vagrant box identity and boot behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VagrantBox {
    /// Box name; also the key into the guest config.
    pub name: String,
    /// Box version, empty for latest.
    pub version: String,
    /// Box download URL, empty for the default catalogue.
    pub url: String,
    /// Vagrant provider.
    pub provider: String,
    /// Vagrant guest type override.
    pub guest_type: String,
    /// Boot timeout in seconds, 0 for the Vagrant default.
    pub boot_timeout: u32,
}

impl Default for VagrantBox {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            url: String::new(),
            provider: "libvirt".to_string(),
            guest_type: String::new(),
            boot_timeout: 0,
        }
    }
}

/// SSH credentials stub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshConfig {
    /// Login user, empty for the box default.
    pub username: String,
    /// Login password, empty for key auth.
    pub password: String,
    /// Whether Vagrant replaces the insecure key.
    pub insert_key: bool,
}

/// Synced folder toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncedFolder {
    /// Whether the project directory is synced into the guest.
    pub enabled: bool,
}

/// A storage volume attached to a guest in addition to its box image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageVolume {
    /// Path of the volume image on the host.
    pub location: String,
    /// Image format (`qcow2` or `raw`).
    #[serde(rename = "type", default = "default_volume_type")]
    pub volume_type: String,
    /// Disk bus, empty to inherit the guest's `disk_bus`.
    #[serde(default)]
    pub bus: String,
}

fn default_volume_type() -> String {
    "qcow2".to_string()
}

/// Hypervisor settings for a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Append a random suffix to the domain name.
    pub random_hostname: bool,
    /// Number of data NICs presented to the guest.
    pub nic_adapter_count: u32,
    /// Disk bus for the box image.
    pub disk_bus: String,
    /// Virtual CPU count.
    pub cpus: u32,
    /// Memory in MiB.
    pub memory: u32,
    /// Fixed MAC for the management NIC, empty for random.
    pub management_network_mac: String,
    /// NIC model, empty for the provider default.
    pub nic_model_type: String,
    /// Storage pool, empty for the provider default.
    pub storage_pool: String,
    /// Extra volumes to attach.
    pub additional_storage_volumes: Vec<StorageVolume>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            random_hostname: true,
            nic_adapter_count: 0,
            disk_bus: String::new(),
            cpus: 1,
            memory: 512,
            management_network_mac: String::new(),
            nic_model_type: String::new(),
            storage_pool: String::new(),
            additional_storage_volumes: Vec::new(),
        }
    }
}

/// A fully merged guest.
///
/// The name is not part of the serialized form; it is the key the guest was
/// declared under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Guest {
    /// Guest name.
    #[serde(skip)]
    pub name: String,
    /// Box identity.
    pub vagrant_box: VagrantBox,
    /// SSH settings.
    pub ssh: SshConfig,
    /// Synced folder settings.
    pub synced_folder: SyncedFolder,
    /// Hypervisor settings.
    pub provider_config: ProviderConfig,
    /// Guest-to-guest links.
    pub data_interfaces: Vec<Interface>,
    /// Box-internal links (e.g. control plane to forwarding plane).
    pub internal_interfaces: Vec<Interface>,
    /// Ports the box reserves and that must be present but unused.
    pub reserved_interfaces: Vec<Interface>,
    /// Storage volumes after size probing and device assignment.
    #[serde(skip)]
    pub resolved_volumes: Vec<ResolvedVolume>,
}

impl Guest {
    /// Builds a guest from its merged document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not match the guest shape.
    pub fn from_value(name: &str, value: serde_yaml::Value) -> Result<Self> {
        let mut guest: Self = serde_yaml::from_value(value).map_err(|e| Error::Validation {
            field: name.to_string(),
            message: e.to_string(),
        })?;
        guest.name = name.to_string();
        Ok(guest)
    }

    /// The box type this guest is an instance of.
    #[must_use]
    pub fn box_name(&self) -> &str {
        &self.vagrant_box.name
    }
}

/// The ordered set of guests in a topology.
///
/// Order is the declaration order of the data document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guests(Vec<Guest>);

impl Guests {
    /// Creates a guest set, preserving order.
    #[must_use]
    pub fn new(guests: Vec<Guest>) -> Self {
        Self(guests)
    }

    /// Looks up a guest by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Guest> {
        self.0.iter().find(|g| g.name == name)
    }

    /// Returns `true` if a guest with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over guests in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Guest> {
        self.0.iter()
    }

    /// Iterates mutably over guests in declaration order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Guest> {
        self.0.iter_mut()
    }

    /// Guest names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|g| g.name.as_str())
    }

    /// Number of guests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no guests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Guests {
    type Item = &'a Guest;
    type IntoIter = std::slice::Iter<'a, Guest>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Guest> for Guests {
    fn from_iter<T: IntoIterator<Item = Guest>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
