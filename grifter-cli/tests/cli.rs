//! Integration tests for the CLI surface: help, version and global flags.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("connections"))
        .stdout(predicate::str::contains("dotfile"))
        .stdout(predicate::str::contains("example"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grifter"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let env = TestEnv::new();
    env.command().arg("destroy").assert().failure();
}

#[test]
fn test_validate_reports_guest_count() {
    let env = TestEnv::new();
    let data = env.back_to_back();
    env.command()
        .arg("validate")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid (2 guest(s))"));
}

#[test]
fn test_explicit_config_flag() {
    let env = TestEnv::new();
    let config = env.write_file(
        "custom/config.yml",
        r"
guest_config:
  acme/sw:
    data_interface_base: port
    data_interface_offset: 1
    internal_interfaces: 0
    max_data_interfaces: 4
    management_interface: mgmt0
    reserved_interfaces: 0
",
    );
    let data = env.write_file(
        "guests.yml",
        r"
a1:
  vagrant_box: {name: acme/sw}
  provider_config: {nic_adapter_count: 1}
  data_interfaces:
    - {local_port: 1, remote_guest: a2, remote_port: 1}
a2:
  vagrant_box: {name: acme/sw}
  provider_config: {nic_adapter_count: 1}
  data_interfaces:
    - {local_port: 1, remote_guest: a1, remote_port: 1}
",
    );

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("connections")
        .arg("--unique")
        .arg(&data)
        .assert()
        .success()
        .stdout("a1-port1 <--> a2-port1\n");
}

#[test]
fn test_config_from_env() {
    let env = TestEnv::new();
    let data = env.back_to_back();
    env.command()
        .env("GRIFTER_CONFIG", env.path().join("missing.yml"))
        .arg("validate")
        .arg(&data)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_in_working_directory_is_found() {
    let env = TestEnv::new();
    // Only cumulus/vx is configured, so arista/veos becomes unknown.
    env.write_file(
        "config.yml",
        r"
guest_config:
  cumulus/vx:
    data_interface_base: swp
    data_interface_offset: 1
    internal_interfaces: 0
    max_data_interfaces: 52
    management_interface: eth0
    reserved_interfaces: 0
",
    );
    let data = env.back_to_back();

    env.command()
        .arg("validate")
        .arg(&data)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "arista/veos is not defined in the config file",
        ));
}

#[test]
fn test_guest_defaults_flag_fills_groups() {
    let env = TestEnv::new();
    let defaults = env.write_file(
        "defaults/groups.yml",
        "arista/veos:\n  provider_config:\n    memory: 8192\n",
    );
    let data = env.back_to_back();

    env.command()
        .arg("--guest-defaults")
        .arg(&defaults)
        .arg("create")
        .arg("--dry-run")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("domain.memory = 8192"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("grifter"));
}
