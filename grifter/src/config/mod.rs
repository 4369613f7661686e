//! Configuration system for grifter.
//!
//! Two documents drive generation besides the guest data itself:
//!
//! - the config document (`config.yml`), describing every supported box type
//! - the guest defaults document (`guest-defaults.yml`), holding per-box
//!   defaults merged under each guest
//!
//! Both are looked up in `/opt/grifter`, `~/.grifter` and the current
//! directory, in that order, with later hits winning. If no config file is
//! found the built-in one is used.
//!
//! # Examples
//!
//! ```
//! use grifter::config::{Config, ConfigMerger, GuestDefaults};
//!
//! let config = Config::builtin().unwrap();
//! assert!(config.guest_config("arista/veos").is_some());
//!
//! let defaults = GuestDefaults::builtin().unwrap();
//! let guest: serde_yaml::Value =
//!     serde_yaml::from_str("vagrant_box: {name: arista/veos}").unwrap();
//! let merged = defaults.apply(&guest);
//! assert_eq!(merged["provider_config"]["cpus"], serde_yaml::Value::from(1));
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use loader::{ConfigLoader, ConfigSource, DataFormat};
pub use merger::{ConfigMerger, GuestDefaults};
pub use schema::{Config, GuestConfig, GuestPair};
pub use validator::ConfigValidator;
