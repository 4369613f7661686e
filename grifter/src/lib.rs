#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # grifter
//!
//! A library for generating Vagrantfiles for virtual network topologies.
//!
//! Guests (routers, switches, servers) are described in a YAML data file
//! together with the point-to-point links between their interfaces. grifter
//! merges defaults into each guest, validates the whole topology, assigns
//! tunnel addresses and interface names, and renders a libvirt Vagrantfile
//! that wires the guests together with UDP tunnels.
//!
//! ## Core Types
//!
//! - [`Context`] and [`ContextBuilder`]: config and defaults for one run
//! - [`Topology`]: the validated, merged and padded guests
//! - [`Guest`], [`Guests`] and [`Interface`]: the guest data model
//! - [`Connection`]: a link between two named interfaces
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use grifter::{Context, Topology};
//!
//! let data: serde_yaml::Value = serde_yaml::from_str(r"
//! sw01:
//!   vagrant_box: {name: arista/veos}
//!   provider_config: {nic_adapter_count: 1}
//!   data_interfaces:
//!     - {local_port: 1, remote_guest: sw02, remote_port: 1}
//! sw02:
//!   vagrant_box: {name: arista/veos}
//!   provider_config: {nic_adapter_count: 1}
//!   data_interfaces:
//!     - {local_port: 1, remote_guest: sw01, remote_port: 1}
//! ").unwrap();
//!
//! let context = Context::builtin().unwrap();
//! let topology = Topology::build(&data, &context).unwrap();
//!
//! let links = topology.connections(&context, true).unwrap();
//! assert_eq!(links[0].to_string(), "sw01-eth1 <--> sw02-eth1");
//! ```

pub mod config;
pub mod connections;
pub mod context;
pub mod error;
pub mod guest;
pub mod interface;
pub mod logging;
pub mod loopback;
pub mod operations;
pub mod output;
pub mod render;
pub mod storage;
pub mod topology;
pub mod validation;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader, GuestDefaults};
pub use connections::{derive_connections, Connection};
pub use context::{Context, ContextBuilder};
pub use error::{Error, Result};
pub use guest::{Guest, Guests, Interface, BLACKHOLE};
pub use logging::{init_logger, LogLevel, Logger};
pub use loopback::{allocate_loopbacks, LoopbackMap};
pub use operations::{CreateOptions, CreatePlan};
pub use output::ConnectionFormat;
pub use topology::Topology;
pub use validation::{FieldError, Violation};
