//! Filling unused interface slots with blackhole placeholders.
//!
//! A guest's NIC list must be contiguous, so every index between the first
//! data interface and the declared NIC count gets an interface even if the
//! user did not wire it.

use crate::guest::{Guests, Interface};
use crate::interface::InterfaceMaps;

/// Pads `declared` to exactly `total` interfaces starting at index `offset`.
///
/// If `declared` already has `total` entries it is returned as is, without
/// checking which indices it covers. Otherwise the result holds one entry per
/// index in `offset..offset + total`: the first declared interface with that
/// `local_port`, or a blackhole placeholder. Declared interfaces outside the
/// range are dropped.
///
/// # Examples
///
/// ```
/// use grifter::{interface::pad_interfaces, Interface};
///
/// let padded = pad_interfaces(1, 3, vec![Interface::new(2, "sw02", 2)]);
/// assert_eq!(padded.len(), 3);
/// assert!(padded[0].is_blackhole());
/// assert_eq!(padded[1].remote_guest, "sw02");
/// assert_eq!(padded[2].local_port, 3);
/// ```
#[must_use]
pub fn pad_interfaces(offset: u32, total: u32, declared: Vec<Interface>) -> Vec<Interface> {
    if declared.len() == total as usize {
        return declared;
    }

    (offset..offset.saturating_add(total))
        .map(|index| {
            declared
                .iter()
                .find(|iface| iface.local_port == index)
                .cloned()
                .unwrap_or_else(|| Interface::blackhole(index))
        })
        .collect()
}

/// Returns the local ports in `declared` that [`pad_interfaces`] will drop.
fn dropped_ports(offset: u32, total: u32, declared: &[Interface]) -> Vec<u32> {
    if declared.len() == total as usize {
        return Vec::new();
    }
    let range = offset..offset.saturating_add(total);
    declared
        .iter()
        .map(|iface| iface.local_port)
        .filter(|port| !range.contains(port))
        .collect()
}

/// Pads every guest's data and reserved interfaces in place.
///
/// Data interfaces are padded to the guest's `nic_adapter_count`, starting at
/// the box's data offset. Guests with no declared data interfaces are left
/// alone. Reserved interfaces are always padded to the box's reserved count.
/// Guests whose box type has no interface map are skipped.
pub fn update_guest_interfaces(guests: &mut Guests, maps: &InterfaceMaps) {
    for guest in guests.iter_mut() {
        let Some(map) = maps.get(guest.box_name()) else {
            log::debug!("no interface map for {}, skipping padding", guest.name);
            continue;
        };

        if !guest.data_interfaces.is_empty() {
            let declared = std::mem::take(&mut guest.data_interfaces);
            let total = guest.provider_config.nic_adapter_count;
            for port in dropped_ports(map.data_offset, total, &declared) {
                log::warn!(
                    "{}: data interface {port} is outside the {total} NIC(s) starting at {}, dropping it",
                    guest.name,
                    map.data_offset
                );
            }
            guest.data_interfaces = pad_interfaces(map.data_offset, total, declared);
        }

        let reserved_count = u32::try_from(map.reserved.len()).unwrap_or(u32::MAX);
        let declared = std::mem::take(&mut guest.reserved_interfaces);
        guest.reserved_interfaces = pad_interfaces(1, reserved_count, declared);

        log::debug!(
            "{}: {} data, {} reserved interfaces after padding",
            guest.name,
            guest.data_interfaces.len(),
            guest.reserved_interfaces.len()
        );
    }
}
