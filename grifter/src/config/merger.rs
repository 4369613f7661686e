//! Layered merging of guest documents.
//!
//! A guest is built from three layers, lowest precedence first: the base
//! guest defaults, the defaults for the guest's box type, and the guest's own
//! document. Mappings merge key by key at every depth; any other value
//! (scalars and lists alike) replaces what was below it.

use serde_yaml::{Mapping, Value};

use crate::config::schema::BASE_DEFAULTS;
use crate::error::{Error, Result};

/// Key of the base defaults inside the defaults document.
pub const GUEST_DEFAULTS_KEY: &str = "guest_defaults";

/// Deep-merges YAML values.
///
/// # Examples
///
/// ```
/// use grifter::config::ConfigMerger;
/// use serde_yaml::Value;
///
/// let low: Value = serde_yaml::from_str("a: {x: 1, y: 2}\nl: [1, 2]\n").unwrap();
/// let high: Value = serde_yaml::from_str("a: {y: 3}\nl: [9]\n").unwrap();
///
/// let merged = ConfigMerger::deep_merge(&low, &high);
/// let expected: Value = serde_yaml::from_str("a: {x: 1, y: 3}\nl: [9]\n").unwrap();
/// assert_eq!(merged, expected);
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Returns `overlay` merged over `base`. Neither input is modified.
    #[must_use]
    pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
        let mut result = base.clone();
        Self::merge_into(&mut result, overlay);
        result
    }

    /// Merges `source` into `target` (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Mapping over mapping: merged key by key, recursively
    /// - Anything else: source replaces target
    pub fn merge_into(target: &mut Value, source: &Value) {
        match (target, source) {
            (Value::Mapping(target_map), Value::Mapping(source_map)) => {
                for (key, value) in source_map {
                    match target_map.get_mut(key) {
                        Some(existing) => Self::merge_into(existing, value),
                        None => {
                            target_map.insert(key.clone(), value.clone());
                        }
                    }
                }
            }
            (target, source) => *target = source.clone(),
        }
    }

    /// Merges the three layers of a guest document.
    #[must_use]
    pub fn merge_guest(base: &Value, group: Option<&Value>, guest: &Value) -> Value {
        let mut result = base.clone();
        if let Some(group) = group {
            Self::merge_into(&mut result, group);
        }
        Self::merge_into(&mut result, guest);
        result
    }
}

/// The base and per-box default layers for guests.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestDefaults {
    base: Value,
    groups: Mapping,
}

impl GuestDefaults {
    /// Built-in base defaults with no per-box defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded document is broken.
    pub fn builtin() -> Result<Self> {
        let document: Value = serde_yaml::from_str(BASE_DEFAULTS)?;
        let base = document
            .get(GUEST_DEFAULTS_KEY)
            .cloned()
            .ok_or_else(|| Error::Validation {
                field: GUEST_DEFAULTS_KEY.to_string(),
                message: "missing from built-in defaults".to_string(),
            })?;
        Ok(Self {
            base,
            groups: Mapping::new(),
        })
    }

    /// Replaces the per-box defaults.
    ///
    /// A `null` document (an empty file) means no per-box defaults.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `groups` is not a mapping of box name to
    /// mapping.
    pub fn with_groups(mut self, groups: Value) -> Result<Self> {
        self.groups = match groups {
            Value::Null => Mapping::new(),
            Value::Mapping(map) => map,
            _ => {
                return Err(Error::Validation {
                    field: "guest defaults".to_string(),
                    message: "must be a mapping of box name to defaults".to_string(),
                })
            }
        };

        for (key, value) in &self.groups {
            if !key.is_string() || !value.is_mapping() {
                return Err(Error::Validation {
                    field: format!("guest defaults.{}", key.as_str().unwrap_or("?")),
                    message: "must be a mapping keyed by box name".to_string(),
                });
            }
        }
        Ok(self)
    }

    /// The base layer.
    #[must_use]
    pub fn base(&self) -> &Value {
        &self.base
    }

    /// The defaults for one box type.
    #[must_use]
    pub fn group(&self, box_name: &str) -> Option<&Value> {
        self.groups.get(box_name)
    }

    /// Merges all layers under a raw guest document.
    ///
    /// The box type is read from the guest's own `vagrant_box.name`.
    #[must_use]
    pub fn apply(&self, guest: &Value) -> Value {
        let group = guest
            .get("vagrant_box")
            .and_then(|b| b.get("name"))
            .and_then(Value::as_str)
            .and_then(|name| self.group(name));
        ConfigMerger::merge_guest(&self.base, group, guest)
    }
}
