//! Loopback address allocation for UDP tunnel endpoints.
//!
//! Every guest gets its own address in one randomly chosen `127.x.y.0/24`
//! network so that tunnel ports only need to be unique per guest. The
//! blackhole pseudo-guest always gets [`BLACKHOLE_LOOPBACK`], and the network
//! that contains it is never chosen.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::guest::BLACKHOLE;

/// Tunnel address for blackhole interfaces.
pub const BLACKHOLE_LOOPBACK: &str = "127.6.6.6";

/// Second and third octets that must never be allocated.
pub const RESERVED_LOOPBACK_NETWORKS: &[(u8, u8)] = &[(6, 6)];

/// Maximum number of guests a single /24 can address.
pub const MAX_GUESTS: usize = 254;

/// Guest name to loopback address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoopbackMap {
    network: String,
    addresses: BTreeMap<String, String>,
}

impl LoopbackMap {
    /// The allocated network, as `127.x.y`.
    #[must_use]
    pub fn network(&self) -> &str {
        &self.network
    }

    /// The address of a guest (or of the blackhole).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.addresses.get(name).map(String::as_str)
    }

    /// Number of entries, including the blackhole.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Always `false`; a map holds at least the blackhole.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Iterates over `(name, address)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.addresses
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Allocates loopbacks for the named guests with a thread-local RNG.
///
/// # Errors
///
/// See [`allocate_loopbacks_with_rng`].
///
/// # Examples
///
/// ```
/// use grifter::loopback::{allocate_loopbacks, BLACKHOLE_LOOPBACK};
///
/// let map = allocate_loopbacks(["sw01", "sw02"]).unwrap();
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get("sw01").unwrap(), format!("{}.1", map.network()));
/// assert_eq!(map.get("blackhole"), Some(BLACKHOLE_LOOPBACK));
/// ```
pub fn allocate_loopbacks<'a, I>(names: I) -> Result<LoopbackMap>
where
    I: IntoIterator<Item = &'a str>,
{
    allocate_loopbacks_with_rng(names, &mut rand::thread_rng())
}

/// Allocates loopbacks for the named guests.
///
/// The nth guest (counting from 1, in iteration order) gets `127.x.y.n`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if there are no guests or more than
/// [`MAX_GUESTS`].
pub fn allocate_loopbacks_with_rng<'a, I, R>(names: I, rng: &mut R) -> Result<LoopbackMap>
where
    I: IntoIterator<Item = &'a str>,
    R: Rng + ?Sized,
{
    let names: Vec<&str> = names.into_iter().collect();
    if names.is_empty() {
        return Err(Error::InvalidArgument {
            reason: "list of guests is empty".to_string(),
        });
    }
    if names.len() > MAX_GUESTS {
        return Err(Error::InvalidArgument {
            reason: format!(
                "{} guests exceeds the maximum of {MAX_GUESTS}",
                names.len()
            ),
        });
    }

    let (x, y) = loop {
        let candidate: (u8, u8) = (rng.gen_range(1..=255), rng.gen_range(1..=255));
        if !RESERVED_LOOPBACK_NETWORKS.contains(&candidate) {
            break candidate;
        }
    };
    let network = format!("127.{x}.{y}");

    let mut addresses: BTreeMap<String, String> = names
        .iter()
        .zip(1..)
        .map(|(name, host)| ((*name).to_string(), format!("{network}.{host}")))
        .collect();
    addresses.insert(BLACKHOLE.to_string(), BLACKHOLE_LOOPBACK.to_string());

    log::debug!("allocated loopback network {network} for {} guests", names.len());
    Ok(LoopbackMap { network, addresses })
}

/// Allocates loopbacks for the guests of a raw data document.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the document is not a non-empty
/// mapping with string keys, or has too many guests.
pub fn allocate_loopbacks_from_value(document: &Value) -> Result<LoopbackMap> {
    let Value::Mapping(map) = document else {
        return Err(Error::InvalidArgument {
            reason: "guest data must be a mapping of guest name to guest".to_string(),
        });
    };
    let names = map
        .keys()
        .map(|k| {
            k.as_str().ok_or_else(|| Error::InvalidArgument {
                reason: "guest names must be strings".to_string(),
            })
        })
        .collect::<Result<Vec<&str>>>()?;
    allocate_loopbacks(names)
}
