//! Integration tests for the `create` command.

mod common;

use common::{TestEnv, DANGLING_LINK};
use predicates::prelude::*;

#[test]
fn test_create_writes_vagrantfile() {
    let env = TestEnv::new();
    let data = env.back_to_back();

    env.command()
        .arg("create")
        .arg(&data)
        .assert()
        .success()
        .stderr(predicate::str::contains("with 2 guest(s)"));

    let vagrantfile = env.read_file("Vagrantfile");
    assert!(vagrantfile.contains("config.vm.define \"sw01\""));
    assert!(vagrantfile.contains("config.vm.define \"sw02\""));
    assert!(vagrantfile.contains(":libvirt__tunnel_local_port => 10001"));
    assert!(!env.path().join("vagrantfile-backup").exists());
}

#[test]
fn test_create_backs_up_existing_vagrantfile() {
    let env = TestEnv::new();
    let data = env.back_to_back();
    env.write_file("Vagrantfile", "# hand written\n");

    env.command()
        .arg("create")
        .arg(&data)
        .assert()
        .success()
        .stderr(predicate::str::contains("Previous Vagrantfile moved to"));

    let backups: Vec<_> = std::fs::read_dir(env.path().join("vagrantfile-backup"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(std::fs::read_to_string(&backups[0]).unwrap(), "# hand written\n");
    assert!(backups[0]
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("Vagrantfile-"));
    assert!(env.read_file("Vagrantfile").contains("Vagrant.configure"));
}

#[test]
fn test_create_into_output_dir() {
    let env = TestEnv::new();
    let data = env.back_to_back();
    let out = env.path().join("lab");
    std::fs::create_dir(&out).unwrap();

    env.command()
        .arg("create")
        .arg("--output-dir")
        .arg(&out)
        .arg(&data)
        .assert()
        .success();

    assert!(out.join("Vagrantfile").exists());
    assert!(!env.path().join("Vagrantfile").exists());
}

#[test]
fn test_dry_run_prints_without_writing() {
    let env = TestEnv::new();
    let data = env.back_to_back();

    env.command()
        .arg("create")
        .arg("--dry-run")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Vagrant.configure(\"2\")"));

    assert!(!env.path().join("Vagrantfile").exists());
}

#[test]
fn test_custom_template() {
    let env = TestEnv::new();
    let data = env.back_to_back();
    let template = env.write_file(
        "custom.tera",
        "{% for guest in guests %}{{ guest.name }}\n{% endfor %}",
    );

    env.command()
        .arg("create")
        .arg("--template")
        .arg(&template)
        .arg(&data)
        .assert()
        .success();

    assert_eq!(env.read_file("Vagrantfile"), "sw01\nsw02\n");
}

#[test]
fn test_invalid_data_writes_nothing() {
    let env = TestEnv::new();
    let data = env.write_file("guests.yml", DANGLING_LINK);

    env.command()
        .arg("create")
        .arg(&data)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sw01 references sw99"));

    assert!(!env.path().join("Vagrantfile").exists());
}

#[test]
fn test_quiet_suppresses_summary() {
    let env = TestEnv::new();
    let data = env.back_to_back();

    env.command()
        .arg("--quiet")
        .arg("create")
        .arg(&data)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
