//! Configuration file discovery and loading.
//!
//! Config files are looked up by name in a fixed list of directories. A file
//! found in a later directory replaces one found earlier, so the current
//! directory beats the user's home which beats the system location.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::{Error, Result};

/// System-wide config directory.
pub const SYSTEM_CONFIG_DIR: &str = "/opt/grifter";

/// Config directory name under the user's home.
pub const USER_CONFIG_DIR: &str = ".grifter";

/// Serialization format of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// YAML (the default).
    Yaml,
    /// JSON, selected by a `.json` extension.
    Json,
}

impl DataFormat {
    /// Picks the format from a file extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use grifter::config::DataFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(DataFormat::from_path(Path::new("guests.JSON")), DataFormat::Json);
    /// assert_eq!(DataFormat::from_path(Path::new("guests.yml")), DataFormat::Yaml);
    /// assert_eq!(DataFormat::from_path(Path::new("guests")), DataFormat::Yaml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// A config document together with where it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    /// Path to the file.
    pub path: PathBuf,
    /// Parsed document.
    pub document: Value,
}

/// Loads data and configuration documents.
///
/// # Examples
///
/// ```no_run
/// use grifter::config::ConfigLoader;
///
/// let dirs = ConfigLoader::default_search_dirs();
/// if let Some(source) = ConfigLoader::search("config.yml", &dirs).unwrap() {
///     println!("using {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// The directories searched for config files, lowest priority first.
    ///
    /// The home directory entry is omitted if the home directory cannot be
    /// determined.
    #[must_use]
    pub fn default_search_dirs() -> Vec<PathBuf> {
        let mut dirs = vec![PathBuf::from(SYSTEM_CONFIG_DIR)];
        match home::home_dir() {
            Some(home) => dirs.push(home.join(USER_CONFIG_DIR)),
            None => log::warn!("could not determine home directory"),
        }
        dirs.push(PathBuf::from("."));
        dirs
    }

    /// Finds `file_name` in `dirs`, returning the last hit.
    ///
    /// Missing files are logged as warnings and unreadable files as errors;
    /// both are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is found but cannot be parsed.
    pub fn search(file_name: &str, dirs: &[PathBuf]) -> Result<Option<ConfigSource>> {
        let mut found = None;

        for dir in dirs {
            let path = dir.join(file_name);
            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    log::warn!("file \"{}\" not found", path.display());
                    continue;
                }
                Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                    log::error!("permission denied reading \"{}\"", path.display());
                    continue;
                }
                Err(e) => {
                    log::error!("could not read \"{}\": {e}", path.display());
                    continue;
                }
            };

            let document = Self::parse(&path, &contents)?;
            log::info!("loaded {}", path.display());
            found = Some(ConfigSource { path, document });
        }

        Ok(found)
    }

    /// Loads and parses a YAML or JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read, or a
    /// validation error if it cannot be parsed.
    pub fn load_file(path: &Path) -> Result<Value> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("failed to read file: {e}"),
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Value> {
        let parsed: std::result::Result<Value, String> = match DataFormat::from_path(path) {
            DataFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            DataFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::Validation {
            field: path.display().to_string(),
            message: format!("invalid document: {message}"),
        })
    }
}
