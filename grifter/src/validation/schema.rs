//! Declarative schema checks over raw YAML documents.
//!
//! A schema is a mapping of field name to [`Rule`]. Rules are written in
//! YAML and understand the keys `type`, `required`, `empty`, `nullable`,
//! `allowed`, `min`, `max`, `schema` and `allow_unknown`. A `schema` under a
//! `dict` rule is a nested field mapping; under a `list` rule it is the rule
//! every item must satisfy.
//!
//! Checking never fails on bad data: every problem becomes a [`FieldError`]
//! and all of them are returned together. Only a malformed schema is an
//! `Err`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::validation::FieldError;

/// Rules for a guest document.
pub const GUEST_SCHEMA: &str = include_str!("../../data/schemas/guest-schema.yml");

/// Rules for one `guest_config` entry.
pub const GUEST_CONFIG_SCHEMA: &str = include_str!("../../data/schemas/guest-config-schema.yml");

/// Rules for one `guest_pairs` entry.
pub const GUEST_PAIR_SCHEMA: &str = include_str!("../../data/schemas/guest-pairs-schema.yml");

/// Value types a rule can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// A string.
    String,
    /// A signed or unsigned integer.
    Integer,
    /// Any number, integer or float.
    Number,
    /// `true` or `false`.
    Boolean,
    /// A mapping.
    Dict,
    /// A sequence.
    List,
}

impl FieldType {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_bool(),
            Self::Dict => value.is_mapping(),
            Self::List => value.is_sequence(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Dict => "dict",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

/// Constraints on a single field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    /// Required value type.
    #[serde(rename = "type", default)]
    pub kind: Option<FieldType>,
    /// Field must be present.
    #[serde(default)]
    pub required: bool,
    /// Empty strings, lists and mappings are accepted.
    #[serde(default = "default_true")]
    pub empty: bool,
    /// `null` is accepted.
    #[serde(default)]
    pub nullable: bool,
    /// Closed set of accepted values.
    #[serde(default)]
    pub allowed: Option<Vec<Value>>,
    /// Inclusive lower bound for numbers.
    #[serde(default)]
    pub min: Option<i64>,
    /// Inclusive upper bound for numbers.
    #[serde(default)]
    pub max: Option<i64>,
    /// Nested schema (`dict`) or item rule (`list`), parsed on use.
    #[serde(default)]
    pub schema: Option<Value>,
    /// Unknown keys in a nested `dict` are accepted.
    #[serde(default)]
    pub allow_unknown: bool,
}

fn default_true() -> bool {
    true
}

/// A parsed field mapping.
///
/// # Examples
///
/// ```
/// use grifter::validation::Schema;
///
/// let schema = Schema::from_yaml("name:\n  type: string\n  required: true\n").unwrap();
/// let doc: serde_yaml::Value = serde_yaml::from_str("name: 3\n").unwrap();
///
/// let errors = schema.validate(&doc).unwrap();
/// assert_eq!(errors[0].to_string(), "name: must be of string type");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: BTreeMap<String, Rule>,
    allow_unknown: bool,
}

impl Schema {
    /// Parses a schema from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSchema`] if the text is not a field-to-rule
    /// mapping.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let fields = serde_yaml::from_str(source).map_err(|e| Error::MalformedSchema {
            field: "<root>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            fields,
            allow_unknown: false,
        })
    }

    /// The built-in guest schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded schema is malformed.
    pub fn guest() -> Result<Self> {
        Self::from_yaml(GUEST_SCHEMA)
    }

    /// The built-in `guest_config` entry schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded schema is malformed.
    pub fn guest_config() -> Result<Self> {
        Self::from_yaml(GUEST_CONFIG_SCHEMA)
    }

    /// The built-in `guest_pairs` entry schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded schema is malformed.
    pub fn guest_pair() -> Result<Self> {
        Self::from_yaml(GUEST_PAIR_SCHEMA)
    }

    /// Accept keys that have no rule instead of reporting them.
    #[must_use]
    pub fn allow_unknown(mut self, allow: bool) -> Self {
        self.allow_unknown = allow;
        self
    }

    /// Checks a document against this schema.
    ///
    /// Paths in the returned errors are relative to the document root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `document` is not a mapping, or
    /// [`Error::MalformedSchema`] if a nested rule cannot be parsed.
    pub fn validate(&self, document: &Value) -> Result<Vec<FieldError>> {
        self.validate_at("", document)
    }

    /// Like [`Schema::validate`], with every error path prefixed by `root`.
    ///
    /// # Errors
    ///
    /// Same as [`Schema::validate`].
    pub fn validate_at(&self, root: &str, document: &Value) -> Result<Vec<FieldError>> {
        let Value::Mapping(map) = document else {
            return Err(Error::InvalidArgument {
                reason: format!("document at '{root}' is not a mapping"),
            });
        };
        let mut errors = Vec::new();
        self.check_mapping(root, map, &mut errors)?;
        Ok(errors)
    }

    fn check_mapping(&self, path: &str, map: &Mapping, errors: &mut Vec<FieldError>) -> Result<()> {
        for (key, value) in map {
            let Some(name) = key.as_str() else {
                errors.push(FieldError::new(
                    join(path, &display_value(key)),
                    "field names must be strings",
                ));
                continue;
            };
            let field = join(path, name);
            match self.fields.get(name) {
                Some(rule) => check_value(&field, rule, value, errors)?,
                None if self.allow_unknown => {}
                None => errors.push(FieldError::new(field, "unknown field")),
            }
        }

        for (name, rule) in &self.fields {
            if rule.required && !map.contains_key(name.as_str()) {
                errors.push(FieldError::new(join(path, name), "required field"));
            }
        }
        Ok(())
    }
}

fn check_value(path: &str, rule: &Rule, value: &Value, errors: &mut Vec<FieldError>) -> Result<()> {
    if value.is_null() {
        if !rule.nullable {
            errors.push(FieldError::new(path, "null value not allowed"));
        }
        return Ok(());
    }

    if let Some(kind) = rule.kind {
        if !kind.matches(value) {
            errors.push(FieldError::new(path, format!("must be of {kind} type")));
            return Ok(());
        }
    }

    if !rule.empty && is_empty(value) {
        errors.push(FieldError::new(path, "empty values not allowed"));
        return Ok(());
    }

    if let Some(allowed) = &rule.allowed {
        if !allowed.contains(value) {
            errors.push(FieldError::new(
                path,
                format!("unallowed value {}", display_value(value)),
            ));
        }
    }

    if let Some(n) = value.as_i64() {
        if let Some(min) = rule.min {
            if n < min {
                errors.push(FieldError::new(path, format!("min value is {min}")));
            }
        }
        if let Some(max) = rule.max {
            if n > max {
                errors.push(FieldError::new(path, format!("max value is {max}")));
            }
        }
    }

    if let Some(nested) = &rule.schema {
        check_nested(path, rule, nested, value, errors)?;
    }
    Ok(())
}

fn check_nested(
    path: &str,
    rule: &Rule,
    nested: &Value,
    value: &Value,
    errors: &mut Vec<FieldError>,
) -> Result<()> {
    let malformed = |e: serde_yaml::Error| Error::MalformedSchema {
        field: path.to_string(),
        message: e.to_string(),
    };

    match (rule.kind, value) {
        (Some(FieldType::Dict), Value::Mapping(map)) => {
            let schema = Schema {
                fields: serde_yaml::from_value(nested.clone()).map_err(malformed)?,
                allow_unknown: rule.allow_unknown,
            };
            schema.check_mapping(path, map, errors)
        }
        (Some(FieldType::List), Value::Sequence(items)) => {
            let item_rule: Rule = serde_yaml::from_value(nested.clone()).map_err(malformed)?;
            for (i, item) in items.iter().enumerate() {
                check_value(&format!("{path}[{i}]"), &item_rule, item, errors)?;
            }
            Ok(())
        }
        _ => Err(Error::MalformedSchema {
            field: path.to_string(),
            message: "nested schema requires type dict or list".to_string(),
        }),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Sequence(s) => s.is_empty(),
        Value::Mapping(m) => m.is_empty(),
        _ => false,
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
