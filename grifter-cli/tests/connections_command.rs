//! Integration tests for the `connections` and `dotfile` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_connections_lists_both_directions() {
    let env = TestEnv::new();
    let data = env.back_to_back();

    env.command()
        .arg("connections")
        .arg(&data)
        .assert()
        .success()
        .stdout(
            "sw01-eth1 <--> sw02-eth1\n\
             sw01-eth2 <--> sw02-eth2\n\
             sw02-eth1 <--> sw01-eth1\n\
             sw02-eth2 <--> sw01-eth2\n",
        );
}

#[test]
fn test_connections_unique() {
    let env = TestEnv::new();
    let data = env.back_to_back();

    env.command()
        .arg("connections")
        .arg("--unique")
        .arg(&data)
        .assert()
        .success()
        .stdout("sw01-eth1 <--> sw02-eth1\nsw01-eth2 <--> sw02-eth2\n");
}

#[test]
fn test_connections_natural_order() {
    let env = TestEnv::new();
    let mut data = String::new();
    for (name, remote) in [("sw2", "sw10"), ("sw10", "sw2")] {
        data.push_str(&format!(
            "{name}:\n  vagrant_box: {{name: arista/veos}}\n  provider_config: {{nic_adapter_count: 1}}\n  data_interfaces:\n    - {{local_port: 1, remote_guest: {remote}, remote_port: 1}}\n"
        ));
    }
    let path = env.write_file("guests.yml", &data);

    env.command()
        .arg("connections")
        .arg(&path)
        .assert()
        .success()
        .stdout("sw2-eth1 <--> sw10-eth1\nsw10-eth1 <--> sw2-eth1\n");
}

#[test]
fn test_connections_as_json() {
    let env = TestEnv::new();
    let data = env.back_to_back();

    let output = env
        .command()
        .arg("connections")
        .arg("--unique")
        .arg("--format")
        .arg("json")
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let links: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["local_guest"], "sw01");
    assert_eq!(links[0]["remote_port"], "eth1");
}

#[test]
fn test_connections_as_dot() {
    let env = TestEnv::new();
    let data = env.back_to_back();

    env.command()
        .arg("connections")
        .arg("--unique")
        .arg("--format")
        .arg("DOT")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph network {"))
        .stdout(predicate::str::contains(r#""sw01":"eth1" -- "sw02":"eth1";"#));
}

#[test]
fn test_dotfile_default_path() {
    let env = TestEnv::new();
    let data = env.back_to_back();

    env.command()
        .arg("dotfile")
        .arg(&data)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 2 edge(s)"));

    let dot = env.read_file("topology.dot");
    assert_eq!(dot.matches(" -- ").count(), 2);
}

#[test]
fn test_dotfile_custom_output() {
    let env = TestEnv::new();
    let data = env.back_to_back();
    let out = env.path().join("lab.dot");

    env.command()
        .arg("dotfile")
        .arg("--output")
        .arg(&out)
        .arg(&data)
        .assert()
        .success();

    assert!(out.exists());
    assert!(!env.path().join("topology.dot").exists());
}
