//! Writing the generated Vagrantfile.
//!
//! An existing Vagrantfile is never overwritten in place: it is first moved
//! into a backup directory next to it, with a timestamp suffix.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{Error, Result};

/// Output file name.
pub const VAGRANTFILE: &str = "Vagrantfile";

/// Backup directory, relative to the output directory.
pub const BACKUP_DIR: &str = "vagrantfile-backup";

/// Timestamp format for backup file names.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d--%H-%M-%S";

/// Where a write went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// The file written.
    pub path: PathBuf,
    /// Where the previous file was moved, if there was one.
    pub backup: Option<PathBuf>,
}

/// Writes `contents` as the Vagrantfile in `dir`, backing up any existing one.
///
/// # Errors
///
/// Returns an I/O error if the backup or the write fails.
pub fn write_vagrantfile(dir: &Path, contents: &str) -> Result<WriteOutcome> {
    write_vagrantfile_at(dir, contents, Local::now())
}

/// Like [`write_vagrantfile`] with an explicit timestamp for the backup name.
///
/// # Errors
///
/// Returns an I/O error if the backup or the write fails, or
/// [`Error::InvalidPath`] if the backup name is already taken.
pub fn write_vagrantfile_at(
    dir: &Path,
    contents: &str,
    now: DateTime<Local>,
) -> Result<WriteOutcome> {
    let path = dir.join(VAGRANTFILE);

    let backup = if path.exists() {
        let backup_dir = dir.join(BACKUP_DIR);
        fs::create_dir_all(&backup_dir)?;
        let backup = backup_dir.join(format!(
            "{VAGRANTFILE}-{}",
            now.format(BACKUP_TIMESTAMP_FORMAT)
        ));
        if backup.exists() {
            return Err(Error::InvalidPath {
                path: backup,
                reason: "backup already exists".to_string(),
            });
        }
        fs::rename(&path, &backup)?;
        log::info!("moved existing {} to {}", path.display(), backup.display());
        Some(backup)
    } else {
        None
    };

    fs::write(&path, contents)?;
    log::info!("wrote {}", path.display());
    Ok(WriteOutcome { path, backup })
}
