//! The data handed to the Vagrantfile template.
//!
//! Everything the template needs is resolved here so the template itself
//! only formats: interface names, tunnel addresses and port bases.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::guest::{
    Guest, Guests, Interface, ProviderConfig, SshConfig, SyncedFolder, VagrantBox, BLACKHOLE,
};
use crate::interface::{InterfaceKind, InterfaceMaps};
use crate::loopback::LoopbackMap;
use crate::storage::ResolvedVolume;

/// One NIC of a guest, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInterface {
    /// Interface category.
    pub kind: InterfaceKind,
    /// Local port index.
    pub local_port: u32,
    /// Local interface name.
    pub local_name: String,
    /// Local tunnel address.
    pub local_ip: String,
    /// Remote guest name, or `blackhole`.
    pub remote_guest: String,
    /// Remote port index.
    pub remote_port: u32,
    /// Remote interface name, or `blackhole`.
    pub remote_name: String,
    /// Remote tunnel address.
    pub remote_ip: String,
    /// Tunnel port base for this interface kind.
    pub base_port: u32,
}

/// One guest as the template sees it.
#[derive(Debug, Serialize)]
pub struct RenderGuest<'a> {
    /// Guest name.
    pub name: &'a str,
    /// Loopback address used as the tunnel endpoint.
    pub loopback: &'a str,
    /// Management interface name for the box type.
    pub management_interface: &'a str,
    /// Box identity.
    pub vagrant_box: &'a VagrantBox,
    /// SSH settings.
    pub ssh: &'a SshConfig,
    /// Synced folder settings.
    pub synced_folder: &'a SyncedFolder,
    /// Hypervisor settings.
    pub provider_config: &'a ProviderConfig,
    /// Extra storage volumes.
    pub storage_volumes: &'a [ResolvedVolume],
    /// Internal, then reserved, then data interfaces.
    pub network_interfaces: Vec<RenderInterface>,
}

/// The complete template context.
#[derive(Debug, Serialize)]
pub struct RenderModel<'a> {
    /// Guests in declaration order.
    pub guests: Vec<RenderGuest<'a>>,
}

impl<'a> RenderModel<'a> {
    /// Resolves every guest for rendering.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a guest has no loopback or interface
    /// map, or an interface index has no name. Validated and padded guests
    /// never trigger these.
    pub fn build(
        guests: &'a Guests,
        loopbacks: &'a LoopbackMap,
        maps: &'a InterfaceMaps,
    ) -> Result<Self> {
        let resolver = Resolver {
            guests,
            loopbacks,
            maps,
        };
        let guests = guests
            .iter()
            .map(|guest| resolver.guest(guest))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { guests })
    }
}

struct Resolver<'a> {
    guests: &'a Guests,
    loopbacks: &'a LoopbackMap,
    maps: &'a InterfaceMaps,
}

impl<'a> Resolver<'a> {
    fn guest(&self, guest: &'a Guest) -> Result<RenderGuest<'a>> {
        let loopback = self.loopback(&guest.name)?;
        let map = self
            .maps
            .get(guest.box_name())
            .ok_or_else(|| missing(&guest.name, format!("unknown box type {}", guest.box_name())))?;

        let mut network_interfaces = Vec::new();
        for (kind, interfaces) in [
            (InterfaceKind::Internal, &guest.internal_interfaces),
            (InterfaceKind::Reserved, &guest.reserved_interfaces),
            (InterfaceKind::Data, &guest.data_interfaces),
        ] {
            for iface in interfaces {
                let local_name = map
                    .port_name(kind, iface.local_port)
                    .ok_or_else(|| {
                        missing(
                            &guest.name,
                            format!("{kind} interface {} has no name", iface.local_port),
                        )
                    })?
                    .to_string();
                let (remote_name, remote_ip) = self.remote_end(&guest.name, kind, iface)?;

                network_interfaces.push(RenderInterface {
                    kind,
                    local_port: iface.local_port,
                    local_name,
                    local_ip: loopback.to_string(),
                    remote_guest: iface.remote_guest.clone(),
                    remote_port: iface.remote_port,
                    remote_name,
                    remote_ip,
                    base_port: kind.base_port(),
                });
            }
        }

        Ok(RenderGuest {
            name: &guest.name,
            loopback,
            management_interface: &map.management,
            vagrant_box: &guest.vagrant_box,
            ssh: &guest.ssh,
            synced_folder: &guest.synced_folder,
            provider_config: &guest.provider_config,
            storage_volumes: &guest.resolved_volumes,
            network_interfaces,
        })
    }

    fn remote_end(
        &self,
        guest: &str,
        kind: InterfaceKind,
        iface: &Interface,
    ) -> Result<(String, String)> {
        let remote_ip = self.loopback(&iface.remote_guest)?.to_string();
        if iface.is_blackhole() {
            return Ok((BLACKHOLE.to_string(), remote_ip));
        }

        let remote_name = self
            .guests
            .get(&iface.remote_guest)
            .and_then(|remote| self.maps.get(remote.box_name()))
            .and_then(|map| map.port_name(kind, iface.remote_port))
            .ok_or_else(|| {
                missing(
                    guest,
                    format!(
                        "{}'s {kind} interface {} has no name",
                        iface.remote_guest, iface.remote_port
                    ),
                )
            })?;
        Ok((remote_name.to_string(), remote_ip))
    }

    fn loopback(&self, name: &str) -> Result<&'a str> {
        self.loopbacks
            .get(name)
            .ok_or_else(|| missing(name, "no loopback address allocated".to_string()))
    }
}

fn missing(field: &str, message: String) -> Error {
    Error::Validation {
        field: field.to_string(),
        message,
    }
}
