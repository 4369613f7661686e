//! Error types for the grifter library.
//!
//! This module provides the error hierarchy for every stage of the
//! Vagrantfile pipeline, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::Violation;

/// Result type alias for operations that may fail with a grifter error.
///
/// # Examples
///
/// ```
/// use grifter::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(10001)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the grifter library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was outside the domain an operation accepts.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },

    /// A file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path could not be used.
        reason: String,
    },

    /// A YAML document could not be parsed or converted.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON document could not be parsed or converted.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The template engine failed to parse or render a template.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A declarative schema is itself malformed.
    #[error("malformed schema at '{field}': {message}")]
    MalformedSchema {
        /// The schema field whose rule is malformed.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// A single field failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A document failed schema or cross-reference validation.
    #[error(
        "{document}: {} validation error(s):\n{}",
        violations.len(),
        render_violations(violations)
    )]
    InvalidDocument {
        /// Which document was rejected (a path, or "guest data").
        document: String,
        /// Every violation found.
        violations: Vec<Violation>,
    },

    /// An additional storage volume could not be probed.
    #[error("storage volume not found: {}", path.display())]
    StorageVolumeNotFound {
        /// The missing volume location.
        path: PathBuf,
    },
}

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Error {
    /// Returns the violations carried by a validation failure, if any.
    ///
    /// A single-field [`Error::Validation`] is not included; only the
    /// aggregated document failure carries a list.
    #[must_use]
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Self::InvalidDocument { violations, .. } => Some(violations),
            _ => None,
        }
    }

    /// Check if the error came from validating user data.
    ///
    /// # Examples
    ///
    /// ```
    /// use grifter::Error;
    ///
    /// let err = Error::Validation { field: "sw01".into(), message: "bad".into() };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidDocument { .. })
    }
}
