//! Common test utilities for integration tests.
//!
//! This module provides guest data fixtures and small builders for
//! testing the grifter library.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_yaml::Value;

use grifter::{Context, Topology};

/// Two switches joined back to back on two links.
pub const BACK_TO_BACK: &str = r"
sw01:
  vagrant_box: {name: arista/veos}
  provider_config: {nic_adapter_count: 2}
  data_interfaces:
    - {local_port: 1, remote_guest: sw02, remote_port: 1}
    - {local_port: 2, remote_guest: sw02, remote_port: 2}
sw02:
  vagrant_box: {name: arista/veos}
  provider_config: {nic_adapter_count: 2}
  data_interfaces:
    - {local_port: 1, remote_guest: sw01, remote_port: 1}
    - {local_port: 2, remote_guest: sw01, remote_port: 2}
";

/// A split control/forwarding plane router wired to a switch.
pub const VMX_PAIR: &str = r"
vcp01:
  vagrant_box: {name: juniper/vmx-vcp}
  internal_interfaces:
    - {local_port: 1, remote_guest: vfp01, remote_port: 1}
vfp01:
  vagrant_box: {name: juniper/vmx-vfp}
  provider_config: {nic_adapter_count: 3}
  internal_interfaces:
    - {local_port: 1, remote_guest: vcp01, remote_port: 1}
  data_interfaces:
    - {local_port: 1, remote_guest: sw01, remote_port: 1}
sw01:
  vagrant_box: {name: arista/veos}
  provider_config: {nic_adapter_count: 1}
  data_interfaces:
    - {local_port: 1, remote_guest: vfp01, remote_port: 1}
";

/// Parses a YAML fixture.
#[allow(dead_code)]
pub fn document(yaml: &str) -> Value {
    serde_yaml::from_str(yaml).expect("fixture is valid YAML")
}

/// Builds a topology with a seeded loopback RNG.
#[allow(dead_code)]
pub fn build_seeded(yaml: &str, context: &Context, seed: u64) -> grifter::Result<Topology> {
    Topology::build_with_rng(&document(yaml), context, &mut StdRng::seed_from_u64(seed))
}

/// Generates a ring of `count` switches, each wired to its neighbours.
#[allow(dead_code)]
pub fn ring(count: usize) -> String {
    let mut yaml = String::new();
    for i in 0..count {
        let next = (i + 1) % count;
        let prev = (i + count - 1) % count;
        yaml.push_str(&format!(
            "sw{i}:\n  vagrant_box: {{name: cumulus/vx}}\n  provider_config: {{nic_adapter_count: 2}}\n  data_interfaces:\n    - {{local_port: 1, remote_guest: sw{next}, remote_port: 2}}\n    - {{local_port: 2, remote_guest: sw{prev}, remote_port: 1}}\n"
        ));
    }
    yaml
}
