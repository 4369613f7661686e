//! Checks that span guests and the config.
//!
//! These run on merged guests, before padding, and collect every problem:
//!
//! - the guest's box type must be configured
//! - every remote guest must be declared
//! - the NIC count must fit the box
//! - local and remote ports must be mapped for their box
//! - internal interfaces must match the box's count
//! - a paired box type must have its partner somewhere in the topology

use crate::config::Config;
use crate::guest::{Guest, Guests, Interface};
use crate::interface::{InterfaceKind, InterfaceMaps};
use crate::validation::Violation;

/// Validates guests against the config and each other.
///
/// # Examples
///
/// ```
/// use grifter::config::Config;
/// use grifter::interface::InterfaceMaps;
/// use grifter::validation::CrossReferenceValidator;
/// use grifter::{Guest, Guests};
///
/// let config = Config::builtin().unwrap();
/// let maps = InterfaceMaps::build(&config);
///
/// let mut guest = Guest { name: "sw01".into(), ..Default::default() };
/// guest.vagrant_box.name = "nope/nope".into();
/// let guests: Guests = vec![guest].into_iter().collect();
///
/// let violations = CrossReferenceValidator::new(&config, &maps).validate(&guests);
/// assert_eq!(violations.len(), 1);
/// ```
pub struct CrossReferenceValidator<'a> {
    config: &'a Config,
    maps: &'a InterfaceMaps,
}

impl<'a> CrossReferenceValidator<'a> {
    /// Creates a validator over a config and its interface maps.
    #[must_use]
    pub fn new(config: &'a Config, maps: &'a InterfaceMaps) -> Self {
        Self { config, maps }
    }

    /// Returns every cross-reference problem, in guest order.
    #[must_use]
    pub fn validate(&self, guests: &Guests) -> Vec<Violation> {
        let mut violations = Vec::new();
        for guest in guests {
            self.check_guest(guest, guests, &mut violations);
        }
        violations
    }

    fn check_guest(&self, guest: &Guest, guests: &Guests, violations: &mut Vec<Violation>) {
        let box_name = guest.box_name();

        for iface in guest
            .data_interfaces
            .iter()
            .chain(&guest.internal_interfaces)
            .chain(&guest.reserved_interfaces)
        {
            if !iface.is_blackhole() && !guests.contains(&iface.remote_guest) {
                violations.push(Violation::UnknownRemoteGuest {
                    guest: guest.name.clone(),
                    remote_guest: iface.remote_guest.clone(),
                });
            }
        }

        let Some(box_config) = self.config.guest_config(box_name) else {
            violations.push(Violation::UnknownBoxType {
                guest: guest.name.clone(),
                box_name: box_name.to_string(),
            });
            return;
        };

        let requested = guest.provider_config.nic_adapter_count;
        if requested > box_config.max_data_interfaces {
            violations.push(Violation::TooManyDataInterfaces {
                guest: guest.name.clone(),
                box_name: box_name.to_string(),
                requested,
                maximum: box_config.max_data_interfaces,
            });
        }

        let declared = guest.internal_interfaces.len();
        if declared != box_config.internal_interfaces as usize {
            violations.push(Violation::InternalInterfaceCount {
                guest: guest.name.clone(),
                box_name: box_name.to_string(),
                declared,
                expected: box_config.internal_interfaces,
            });
        }

        self.check_ports(guest, InterfaceKind::Data, &guest.data_interfaces, guests, violations);
        self.check_ports(
            guest,
            InterfaceKind::Internal,
            &guest.internal_interfaces,
            guests,
            violations,
        );
        self.check_ports(
            guest,
            InterfaceKind::Reserved,
            &guest.reserved_interfaces,
            guests,
            violations,
        );

        if let Some(partner) = self.config.partner(box_name) {
            if !guests.iter().any(|g| g.box_name() == partner) {
                violations.push(Violation::MissingPartner {
                    guest: guest.name.clone(),
                    box_name: box_name.to_string(),
                    partner: partner.to_string(),
                });
            }
        }
    }

    fn check_ports(
        &self,
        guest: &Guest,
        kind: InterfaceKind,
        interfaces: &[Interface],
        guests: &Guests,
        violations: &mut Vec<Violation>,
    ) {
        let Some(local_map) = self.maps.get(guest.box_name()) else {
            return;
        };

        for iface in interfaces {
            if !local_map.ports(kind).contains_key(&iface.local_port) {
                violations.push(Violation::LocalPortOutOfRange {
                    guest: guest.name.clone(),
                    kind,
                    port: iface.local_port,
                });
            }

            if iface.is_blackhole() {
                continue;
            }

            // Unknown remotes and remote box types are reported elsewhere.
            let Some(remote_map) = guests
                .get(&iface.remote_guest)
                .and_then(|remote| self.maps.get(remote.box_name()))
            else {
                continue;
            };

            if !remote_map.ports(kind).contains_key(&iface.remote_port) {
                violations.push(Violation::RemotePortOutOfRange {
                    guest: guest.name.clone(),
                    remote_guest: iface.remote_guest.clone(),
                    kind,
                    port: iface.remote_port,
                });
            }
        }
    }
}
