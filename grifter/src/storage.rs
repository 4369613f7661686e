//! Additional storage volumes.
//!
//! Volumes declared under `provider_config.additional_storage_volumes` are
//! probed on the host for their size and given guest device names in
//! declaration order (`hdb`, `hdc`, … on IDE; `vdb`, … on virtio).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::guest::{Guest, Guests};

/// Bus used when neither the volume nor the guest names one.
pub const DEFAULT_DISK_BUS: &str = "ide";

/// The box image occupies the first device, so extra volumes start here.
const FIRST_DEVICE_LETTER: u8 = b'b';

/// A storage volume ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVolume {
    /// Volume name (the image's file name).
    pub name: String,
    /// Path of the image on the host.
    pub location: String,
    /// Image size in bytes.
    pub size: u64,
    /// Image format.
    pub volume_type: String,
    /// Disk bus.
    pub bus: String,
    /// Guest device name.
    pub device: String,
}

/// Guest device name for the `index`th extra volume on `bus`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the bus has run out of device letters.
///
/// # Examples
///
/// ```
/// use grifter::storage::device_name;
///
/// assert_eq!(device_name("ide", 0).unwrap(), "hdb");
/// assert_eq!(device_name("virtio", 1).unwrap(), "vdc");
/// assert_eq!(device_name("sata", 0).unwrap(), "sdb");
/// ```
pub fn device_name(bus: &str, index: usize) -> Result<String> {
    let prefix = match bus {
        "virtio" => "vd",
        "scsi" | "sata" | "usb" => "sd",
        _ => "hd",
    };
    let letter = u8::try_from(index)
        .ok()
        .and_then(|i| FIRST_DEVICE_LETTER.checked_add(i))
        .filter(u8::is_ascii_lowercase)
        .ok_or_else(|| Error::InvalidArgument {
            reason: format!("too many storage volumes on {bus} bus"),
        })?;
    Ok(format!("{prefix}{}", char::from(letter)))
}

/// Probes and names every extra volume of one guest.
///
/// # Errors
///
/// Returns [`Error::StorageVolumeNotFound`] if a volume file does not exist,
/// or [`Error::InvalidPath`] if it cannot be inspected.
pub fn resolve_storage_volumes(guest: &Guest) -> Result<Vec<ResolvedVolume>> {
    let guest_bus = if guest.provider_config.disk_bus.is_empty() {
        DEFAULT_DISK_BUS
    } else {
        guest.provider_config.disk_bus.as_str()
    };

    guest
        .provider_config
        .additional_storage_volumes
        .iter()
        .enumerate()
        .map(|(index, volume)| {
            let path = Path::new(&volume.location);
            let size = probe_size(path)?;
            let bus = if volume.bus.is_empty() {
                guest_bus
            } else {
                volume.bus.as_str()
            };
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| volume.location.clone());

            Ok(ResolvedVolume {
                name,
                location: volume.location.clone(),
                size,
                volume_type: volume.volume_type.clone(),
                bus: bus.to_string(),
                device: device_name(bus, index)?,
            })
        })
        .collect()
}

/// Resolves storage for every guest in place.
///
/// # Errors
///
/// Returns the first volume that cannot be resolved.
pub fn update_guest_storage(guests: &mut Guests) -> Result<()> {
    for guest in guests.iter_mut() {
        guest.resolved_volumes = resolve_storage_volumes(guest)?;
        if !guest.resolved_volumes.is_empty() {
            log::debug!(
                "{}: {} storage volume(s)",
                guest.name,
                guest.resolved_volumes.len()
            );
        }
    }
    Ok(())
}

fn probe_size(path: &Path) -> Result<u64> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::StorageVolumeNotFound {
            path: PathBuf::from(path),
        }),
        Err(e) => Err(Error::InvalidPath {
            path: PathBuf::from(path),
            reason: e.to_string(),
        }),
    }
}
