//! Build script for grifter-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("grifter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate Vagrantfiles for virtual network topologies")
        .long_about(
            "Command-line tool for generating libvirt Vagrantfiles from YAML descriptions of \
             network guests and the links between them",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this config file instead of searching for config.yml")
                .value_name("PATH")
                .global(true)
                .env("GRIFTER_CONFIG"),
        )
        .arg(
            Arg::new("guest-defaults")
                .long("guest-defaults")
                .help("Use this guest defaults file instead of searching for guest-defaults.yml")
                .value_name("PATH")
                .global(true)
                .env("GRIFTER_GUEST_DEFAULTS"),
        )
        .subcommands(vec![
            Command::new("create")
                .about("Create a Vagrantfile from a guest data file")
                .long_about("Validate the guest data, render the template and write a Vagrantfile"),
            Command::new("example")
                .about("Print example and default documents")
                .long_about("Print the example guest data, example groups, built-in config or base defaults"),
            Command::new("connections")
                .about("List the connections between guests")
                .long_about("Print the naturally sorted list of links as text, graphviz or JSON"),
            Command::new("dotfile")
                .about("Write the connections as a graphviz file")
                .long_about("Write each link once as an undirected graphviz graph"),
            Command::new("validate")
                .about("Validate a guest data file without writing anything")
                .long_about("Run schema and cross-reference checks over a guest data file"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("grifter.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
