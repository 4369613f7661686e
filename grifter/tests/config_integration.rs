//! Integration tests for config discovery, guest defaults and merging.
//!
//! Tests that point `HOME` at a scratch directory are marked `#[serial]`,
//! since environment variables are process-global.

mod common;

use common::{build_seeded, BACK_TO_BACK};
use grifter::config::merger::GUEST_DEFAULTS_KEY;
use grifter::config::ConfigLoader;
use grifter::{ContextBuilder, Error};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const ACME_CONFIG: &str = r"
guest_config:
  acme/sw:
    data_interface_base: port
    data_interface_offset: 1
    internal_interfaces: 0
    max_data_interfaces: 4
    management_interface: mgmt0
    reserved_interfaces: 0
";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// RAII guard for setting and restoring an environment variable.
struct EnvGuard {
    key: &'static str,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &'static str, value: &Path) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_later_directory_wins() {
    let system = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    write(system.path(), "config.yml", "guest_config: {}\n");
    let user_config = write(user.path(), "config.yml", ACME_CONFIG);

    let dirs = vec![system.path().to_path_buf(), user.path().to_path_buf()];
    let source = ConfigLoader::search("config.yml", &dirs).unwrap().unwrap();
    assert_eq!(source.path, user_config);

    let context = ContextBuilder::new().with_search_dirs(dirs).build().unwrap();
    assert!(context.config().guest_config("acme/sw").is_some());
    assert!(context.config().guest_config("arista/veos").is_none());
}

#[test]
fn test_missing_everywhere_falls_back_to_builtin() {
    let empty = TempDir::new().unwrap();
    let context = ContextBuilder::new()
        .with_search_dirs(vec![empty.path().to_path_buf()])
        .build()
        .unwrap();
    assert!(context.config().guest_config("arista/veos").is_some());
    assert!(context.guest_defaults().group("arista/veos").is_none());
}

#[test]
fn test_unparseable_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "config.yml", "guest_config: [unclosed\n");
    let err = ContextBuilder::new()
        .with_search_dirs(vec![dir.path().to_path_buf()])
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_json_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "config.json",
        r#"{"guest_config": {"acme/sw": {
            "data_interface_base": "port", "data_interface_offset": 1,
            "internal_interfaces": 0, "max_data_interfaces": 4,
            "management_interface": "mgmt0", "reserved_interfaces": 0}}}"#,
    );
    let context = ContextBuilder::new()
        .skip_files()
        .with_config_file(path)
        .build()
        .unwrap();
    assert_eq!(context.interface_maps().len(), 1);
}

#[test]
fn test_invalid_config_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "config.yml",
        "guest_config:\n  acme/sw: {data_interface_base: port}\n",
    );
    let err = ContextBuilder::new()
        .skip_files()
        .with_config_file(&path)
        .build()
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with(&path.display().to_string()));
    assert!(message.contains("guest_config.acme/sw.max_data_interfaces: required field"));
}

#[test]
fn test_pair_partner_must_be_configured() {
    let dir = TempDir::new().unwrap();
    let config = format!("{ACME_CONFIG}guest_pairs:\n  acme/sw: {{partner: acme/missing}}\n");
    let path = write(dir.path(), "config.yml", &config);
    let err = ContextBuilder::new()
        .skip_files()
        .with_config_file(path)
        .build()
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("guest pair acme/sw refers to acme/missing"));
}

#[test]
#[serial]
fn test_user_directory_is_searched() {
    let home = TempDir::new().unwrap();
    write(home.path(), ".grifter/config.yml", ACME_CONFIG);
    let _guard = EnvGuard::new("HOME", home.path());

    let dirs = ConfigLoader::default_search_dirs();
    assert!(dirs.contains(&home.path().join(".grifter")));

    let source = ConfigLoader::search("config.yml", &dirs).unwrap().unwrap();
    assert_eq!(source.path, home.path().join(".grifter").join("config.yml"));
}

// ============================================================================
// Guest defaults
// ============================================================================

#[test]
fn test_guest_overrides_group_overrides_base() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "guest-defaults.yml",
        "arista/veos:\n  provider_config: {cpus: 4, memory: 4096}\n",
    );
    let context = ContextBuilder::new()
        .with_search_dirs(vec![dir.path().to_path_buf()])
        .build()
        .unwrap();

    let yaml = BACK_TO_BACK.replacen(
        "provider_config: {nic_adapter_count: 2}",
        "provider_config: {nic_adapter_count: 2, memory: 1024}",
        1,
    );
    let topology = build_seeded(&yaml, &context, 5).unwrap();

    let sw01 = topology.guests().get("sw01").unwrap();
    assert_eq!(sw01.provider_config.cpus, 4);
    assert_eq!(sw01.provider_config.memory, 1024);
    // Base defaults fill what neither layer sets.
    assert_eq!(sw01.vagrant_box.provider, "libvirt");

    let sw02 = topology.guests().get("sw02").unwrap();
    assert_eq!(sw02.provider_config.memory, 4096);
}

#[test]
fn test_guest_defaults_must_be_a_mapping() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "groups.yml", "- arista/veos\n");
    let err = ContextBuilder::new()
        .skip_files()
        .with_guest_defaults_file(path)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_base_defaults_are_wrapped() {
    let base: serde_yaml::Value =
        serde_yaml::from_str(grifter::config::schema::BASE_DEFAULTS).unwrap();
    assert!(base.get(GUEST_DEFAULTS_KEY).is_some());
}
