//! Vagrantfile template rendering with tera.

use std::path::Path;

use tera::Tera;

use crate::error::{Error, Result};
use crate::render::filters::explode_port_filter;
use crate::render::model::RenderModel;

/// The built-in Vagrantfile template.
pub const GUEST_TEMPLATE: &str = include_str!("../../data/templates/guest.tera");

const TEMPLATE_NAME: &str = "Vagrantfile";

/// Renders a [`RenderModel`] with the built-in or a user-supplied template.
///
/// Autoescaping is off; the output is Ruby, not HTML.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// A renderer using the built-in template.
    ///
    /// # Errors
    ///
    /// Returns a template error if the template does not parse.
    pub fn builtin() -> Result<Self> {
        Self::from_source(GUEST_TEMPLATE)
    }

    /// A renderer using template text.
    ///
    /// # Errors
    ///
    /// Returns a template error if the template does not parse.
    pub fn from_source(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.register_filter("explode_port", explode_port_filter);
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// A renderer using a template file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read, or a
    /// template error if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("failed to read template: {e}"),
        })?;
        log::debug!("using template {}", path.display());
        Self::from_source(&source)
    }

    /// Renders the model.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails, e.g. a port the
    /// `explode_port` filter rejects.
    pub fn render(&self, model: &RenderModel<'_>) -> Result<String> {
        let context = tera::Context::from_serialize(model)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}
