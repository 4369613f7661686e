//! Vagrantfile creation.
//!
//! Creation is split into planning, which runs the whole pipeline and
//! renders the file in memory, and execution, which writes it. A plan can be
//! inspected (or printed for a dry run) without touching the filesystem.

use std::path::PathBuf;

use serde_yaml::Value;

use crate::context::Context;
use crate::error::Result;
use crate::render::{write_vagrantfile, TemplateRenderer, WriteOutcome, VAGRANTFILE};
use crate::storage::update_guest_storage;
use crate::topology::Topology;

/// Options for a create operation.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Directory the Vagrantfile is written to.
    pub output_dir: PathBuf,

    /// Template file to use instead of the built-in one.
    pub template: Option<PathBuf>,
}

impl CreateOptions {
    /// Creates options writing to `output_dir` with the built-in template.
    ///
    /// # Examples
    ///
    /// ```
    /// use grifter::operations::CreateOptions;
    ///
    /// let options = CreateOptions::new(".");
    /// assert!(options.template.is_none());
    /// ```
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            template: None,
        }
    }

    /// Sets the template file.
    #[must_use]
    pub fn with_template(mut self, template: Option<PathBuf>) -> Self {
        self.template = template;
        self
    }
}

/// A rendered Vagrantfile waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlan {
    /// Where the file will be written.
    pub path: PathBuf,
    /// The rendered file.
    pub contents: String,
    /// Number of guests defined.
    pub guest_count: usize,
}

impl CreatePlan {
    /// Runs the pipeline and renders the Vagrantfile.
    ///
    /// # Errors
    ///
    /// Returns any validation, storage or template error.
    pub fn build(document: &Value, context: &Context, options: &CreateOptions) -> Result<Self> {
        let renderer = match &options.template {
            Some(path) => TemplateRenderer::from_file(path)?,
            None => TemplateRenderer::builtin()?,
        };

        let mut topology = Topology::build(document, context)?;
        update_guest_storage(topology.guests_mut())?;

        let contents = renderer.render(&topology.render_model(context)?)?;
        Ok(Self {
            path: options.output_dir.join(VAGRANTFILE),
            contents,
            guest_count: topology.guests().len(),
        })
    }

    /// Writes the file, backing up any existing one.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backup or write fails.
    pub fn execute(&self) -> Result<WriteOutcome> {
        let dir = self
            .path
            .parent()
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        write_vagrantfile(&dir, &self.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EXAMPLE_GUESTS;
    use crate::Error;
    use std::fs;
    use tempfile::TempDir;

    fn example() -> Value {
        serde_yaml::from_str(EXAMPLE_GUESTS).unwrap()
    }

    #[test]
    fn test_plan_then_execute() {
        let dir = TempDir::new().unwrap();
        let context = Context::builtin().unwrap();
        let plan = CreatePlan::build(&example(), &context, &CreateOptions::new(dir.path())).unwrap();

        assert_eq!(plan.guest_count, 2);
        assert_eq!(plan.path, dir.path().join("Vagrantfile"));
        assert!(!plan.path.exists());

        let outcome = plan.execute().unwrap();
        assert!(outcome.backup.is_none());
        assert_eq!(fs::read_to_string(&outcome.path).unwrap(), plan.contents);
    }

    #[test]
    fn test_storage_volumes_are_rendered() {
        let dir = TempDir::new().unwrap();
        let volume = dir.path().join("volume1.qcow2");
        fs::write(&volume, vec![0u8; 2048]).unwrap();

        let doc: Value = serde_yaml::from_str(&format!(
            "sw01:\n  vagrant_box: {{name: arista/veos}}\n  provider_config:\n    additional_storage_volumes:\n      - {{location: {}, type: qcow2, bus: ide}}\n",
            volume.display()
        ))
        .unwrap();

        let plan = CreatePlan::build(&doc, &Context::builtin().unwrap(), &CreateOptions::new(dir.path()))
            .unwrap();
        assert!(plan.contents.contains(":size => \"2048\""));
        assert!(plan.contents.contains(":device => \"hdb\""));
        assert!(plan.contents.contains("virsh vol-delete #{username}-#{guest_name}-volume1.qcow2 default"));
    }

    #[test]
    fn test_missing_volume_fails_before_writing() {
        let dir = TempDir::new().unwrap();
        let doc: Value = serde_yaml::from_str(
            "sw01:\n  vagrant_box: {name: arista/veos}\n  provider_config:\n    additional_storage_volumes:\n      - {location: /fake/volume1.qcow2}\n",
        )
        .unwrap();

        let err = CreatePlan::build(&doc, &Context::builtin().unwrap(), &CreateOptions::new(dir.path()))
            .unwrap_err();
        assert!(matches!(err, Error::StorageVolumeNotFound { .. }));
        assert!(!dir.path().join("Vagrantfile").exists());
    }

    #[test]
    fn test_custom_template_file() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("custom.tera");
        fs::write(&template, "{% for g in guests %}{{ g.name }} {{ g.loopback }}\n{% endfor %}").unwrap();

        let options = CreateOptions::new(dir.path()).with_template(Some(template));
        let plan = CreatePlan::build(&example(), &Context::builtin().unwrap(), &options).unwrap();
        let lines: Vec<&str> = plan.contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("sw01 127."));
    }
}
