//! The per-invocation context.
//!
//! Config, interface maps and guest defaults are loaded once, up front, and
//! passed explicitly to every stage of the pipeline.
//!
//! # Examples
//!
//! ```
//! use grifter::ContextBuilder;
//!
//! let context = ContextBuilder::new().skip_files().build().unwrap();
//! assert!(context.interface_maps().get("arista/veos").is_some());
//! ```

use std::path::PathBuf;

use serde_yaml::Value;

use crate::config::schema::{CONFIG_FILE_NAME, GUEST_DEFAULTS_FILE_NAME};
use crate::config::{Config, ConfigLoader, ConfigValidator, GuestDefaults};
use crate::error::Result;
use crate::interface::InterfaceMaps;

/// Everything the pipeline needs besides the guest data.
#[derive(Debug, Clone)]
pub struct Context {
    config: Config,
    interface_maps: InterfaceMaps,
    guest_defaults: GuestDefaults,
}

impl Context {
    /// Creates a context, deriving interface maps from the config.
    #[must_use]
    pub fn new(config: Config, guest_defaults: GuestDefaults) -> Self {
        let interface_maps = InterfaceMaps::build(&config);
        Self {
            config,
            interface_maps,
            guest_defaults,
        }
    }

    /// The built-in config and defaults, ignoring all files.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded documents are broken.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Config::builtin()?, GuestDefaults::builtin()?))
    }

    /// Box type settings.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Interface names per box type.
    #[must_use]
    pub fn interface_maps(&self) -> &InterfaceMaps {
        &self.interface_maps
    }

    /// Base and per-box guest defaults.
    #[must_use]
    pub fn guest_defaults(&self) -> &GuestDefaults {
        &self.guest_defaults
    }
}

/// Builds a [`Context`] from files.
///
/// Explicit paths must exist. Without them, the config and guest defaults
/// files are searched for in the search directories; a missing config falls
/// back to the built-in one and missing guest defaults mean none.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    config_file: Option<PathBuf>,
    guest_defaults_file: Option<PathBuf>,
    search_dirs: Option<Vec<PathBuf>>,
    skip_files: bool,
}

impl ContextBuilder {
    /// A builder with default search directories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this config file instead of searching.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Use this guest defaults file instead of searching.
    #[must_use]
    pub fn with_guest_defaults_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.guest_defaults_file = Some(path.into());
        self
    }

    /// Search these directories, lowest priority first.
    #[must_use]
    pub fn with_search_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = Some(dirs);
        self
    }

    /// Do not search for files; explicit paths are still loaded.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Loads, validates and assembles the context.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, a found file does
    /// not parse, or the config fails validation.
    pub fn build(self) -> Result<Context> {
        let dirs = match (&self.search_dirs, self.skip_files) {
            (_, true) => Vec::new(),
            (Some(dirs), false) => dirs.clone(),
            (None, false) => ConfigLoader::default_search_dirs(),
        };

        let config = match Self::find(self.config_file.as_ref(), CONFIG_FILE_NAME, &dirs)? {
            Some((name, document)) => ConfigValidator::into_config(&name, &document)?,
            None => {
                log::info!("using built-in config");
                Config::builtin()?
            }
        };

        let groups = Self::find(self.guest_defaults_file.as_ref(), GUEST_DEFAULTS_FILE_NAME, &dirs)?
            .map_or(Value::Null, |(_, document)| document);
        let guest_defaults = GuestDefaults::builtin()?.with_groups(groups)?;

        Ok(Context::new(config, guest_defaults))
    }

    fn find(
        explicit: Option<&PathBuf>,
        file_name: &str,
        dirs: &[PathBuf],
    ) -> Result<Option<(String, Value)>> {
        if let Some(path) = explicit {
            let document = ConfigLoader::load_file(path)?;
            return Ok(Some((path.display().to_string(), document)));
        }
        Ok(ConfigLoader::search(file_name, dirs)?
            .map(|source| (source.path.display().to_string(), source.document)))
    }
}
