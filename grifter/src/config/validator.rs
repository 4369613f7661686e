//! Configuration validation.
//!
//! The config document is checked against the declarative schemas first,
//! then for pairs that name unconfigured box types. Everything found is
//! reported at once.

use serde_yaml::Value;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::validation::{into_result, FieldError, Schema, Violation};

const CONFIG_DOCUMENT_SCHEMA: &str = "
guest_config:
  type: dict
  required: true
  empty: false
guest_pairs:
  type: dict
";

/// Validates config documents.
///
/// # Examples
///
/// ```
/// use grifter::config::ConfigValidator;
///
/// let doc: serde_yaml::Value = serde_yaml::from_str("guest_pairs: {}\n").unwrap();
/// let violations = ConfigValidator::validate(&doc).unwrap();
/// assert_eq!(violations[0].to_string(), "guest_config: required field");
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Returns every problem with a config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a mapping or a built-in schema
    /// is broken.
    pub fn validate(document: &Value) -> Result<Vec<Violation>> {
        let mut errors: Vec<FieldError> =
            Schema::from_yaml(CONFIG_DOCUMENT_SCHEMA)?.validate(document)?;

        let entry_schema = Schema::guest_config()?;
        if let Some(Value::Mapping(entries)) = document.get("guest_config") {
            for (name, entry) in entries {
                let path = format!("guest_config.{}", key_name(name));
                match entry {
                    Value::Mapping(_) => errors.extend(entry_schema.validate_at(&path, entry)?),
                    _ => errors.push(FieldError::new(path, "must be of dict type")),
                }
            }
        }

        let pair_schema = Schema::guest_pair()?;
        if let Some(Value::Mapping(pairs)) = document.get("guest_pairs") {
            for (name, pair) in pairs {
                let path = format!("guest_pairs.{}", key_name(name));
                match pair {
                    Value::Mapping(_) => errors.extend(pair_schema.validate_at(&path, pair)?),
                    _ => errors.push(FieldError::new(path, "must be of dict type")),
                }
            }
        }

        let mut violations: Vec<Violation> = errors.into_iter().map(Violation::from).collect();
        if violations.is_empty() {
            let config: Config = serde_yaml::from_value(document.clone())?;
            violations.extend(Self::check_pairs(&config));
        }
        Ok(violations)
    }

    /// Validates a config document and converts it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDocument`] naming `document_name` if any check
    /// fails.
    pub fn into_config(document_name: &str, document: &Value) -> Result<Config> {
        into_result(document_name, Self::validate(document)?)?;
        serde_yaml::from_value(document.clone()).map_err(Error::from)
    }

    fn check_pairs(config: &Config) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (box_name, pair) in &config.guest_pairs {
            for missing in [box_name, &pair.partner] {
                if config.guest_config(missing).is_none() {
                    violations.push(Violation::UnknownPairBox {
                        box_name: box_name.clone(),
                        missing: missing.clone(),
                    });
                }
            }
        }
        violations
    }
}

fn key_name(key: &Value) -> String {
    key.as_str().map_or_else(|| format!("{key:?}"), str::to_string)
}
