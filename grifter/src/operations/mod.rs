//! High-level operations behind each command.
//!
//! Every operation takes a raw data document and a [`Context`](crate::Context),
//! runs the full validation pipeline and only then produces output, so
//! nothing is written for invalid data.
//!
//! # Examples
//!
//! ```no_run
//! use grifter::operations::{CreateOptions, CreatePlan};
//! use grifter::config::ConfigLoader;
//! use grifter::ContextBuilder;
//! use std::path::Path;
//!
//! let context = ContextBuilder::new().build().unwrap();
//! let data = ConfigLoader::load_file(Path::new("guests.yml")).unwrap();
//!
//! let plan = CreatePlan::build(&data, &context, &CreateOptions::new(".")).unwrap();
//! let outcome = plan.execute().unwrap();
//! println!("wrote {}", outcome.path.display());
//! ```

pub mod connections;
pub mod create;

pub use connections::{list_connections, write_dotfile, ConnectionsOptions, DEFAULT_DOTFILE};
pub use create::{CreateOptions, CreatePlan};
