//! Vagrantfile rendering.
//!
//! Guests are resolved into a [`RenderModel`], rendered with tera and
//! written out with [`write_vagrantfile`].

pub mod filters;
pub mod model;
pub mod template;
pub mod writer;

pub use filters::{explode_port, explode_port_filter};
pub use model::{RenderGuest, RenderInterface, RenderModel};
pub use template::{TemplateRenderer, GUEST_TEMPLATE};
pub use writer::{write_vagrantfile, write_vagrantfile_at, WriteOutcome, VAGRANTFILE};
