//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `create`: Render and write a Vagrantfile
//! - `example`: Print example and default documents
//! - `connections`: List the links between guests
//! - `dotfile`: Write the links as a graphviz file
//! - `validate`: Check a guest data file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod connections;
pub mod create;
pub mod dotfile;
pub mod example;
pub mod validate;

pub use completions::CompletionsCommand;
pub use connections::ConnectionsCommand;
pub use create::CreateCommand;
pub use dotfile::DotfileCommand;
pub use example::ExampleCommand;
pub use validate::ValidateCommand;
