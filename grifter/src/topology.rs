//! The guest pipeline.
//!
//! Building a topology from a raw data document runs these stages in order:
//!
//! 1. schema validation of every raw guest (all errors collected)
//! 2. loopback allocation
//! 3. merging base, per-box and guest layers
//! 4. cross-reference validation (all errors collected)
//! 5. interface padding
//!
//! Either validation stage stops the pipeline with
//! [`Error::InvalidDocument`](crate::Error::InvalidDocument).

use rand::Rng;
use serde_yaml::Value;

use crate::connections::{derive_connections, Connection};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::guest::{Guest, Guests};
use crate::interface::update_guest_interfaces;
use crate::loopback::{allocate_loopbacks_with_rng, LoopbackMap};
use crate::render::RenderModel;
use crate::validation::{into_result, CrossReferenceValidator, FieldError, Schema, Violation};

/// Document name used in validation errors for guest data.
pub const GUEST_DATA: &str = "guest data";

/// Validated, merged and padded guests with their loopbacks.
#[derive(Debug, Clone)]
pub struct Topology {
    guests: Guests,
    loopbacks: LoopbackMap,
}

impl Topology {
    /// Runs the pipeline over a raw data document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the document is not a non-empty
    /// mapping, and [`Error::InvalidDocument`] listing every schema or
    /// cross-reference violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use grifter::{Context, Topology};
    ///
    /// let data: serde_yaml::Value = serde_yaml::from_str(
    ///     "sw01:\n  vagrant_box: {name: arista/veos}\n",
    /// )
    /// .unwrap();
    /// let topology = Topology::build(&data, &Context::builtin().unwrap()).unwrap();
    /// assert_eq!(topology.guests().len(), 1);
    /// ```
    pub fn build(document: &Value, context: &Context) -> Result<Self> {
        Self::build_with_rng(document, context, &mut rand::thread_rng())
    }

    /// Like [`Topology::build`] with a caller-supplied RNG for loopbacks.
    ///
    /// # Errors
    ///
    /// Same as [`Topology::build`].
    pub fn build_with_rng<R: Rng + ?Sized>(
        document: &Value,
        context: &Context,
        rng: &mut R,
    ) -> Result<Self> {
        let entries = guest_entries(document)?;

        let errors = validate_entries(&entries)?;
        into_result(GUEST_DATA, errors.into_iter().map(Violation::from).collect())?;

        let loopbacks = allocate_loopbacks_with_rng(entries.iter().map(|(name, _)| *name), rng)?;

        let defaults = context.guest_defaults();
        let mut guests = entries
            .iter()
            .map(|(name, raw)| Guest::from_value(name, defaults.apply(raw)))
            .collect::<Result<Guests>>()?;

        let violations =
            CrossReferenceValidator::new(context.config(), context.interface_maps())
                .validate(&guests);
        into_result(GUEST_DATA, violations)?;

        update_guest_interfaces(&mut guests, context.interface_maps());
        log::info!("built topology with {} guests", guests.len());

        Ok(Self { guests, loopbacks })
    }

    /// The guests, in declaration order.
    #[must_use]
    pub fn guests(&self) -> &Guests {
        &self.guests
    }

    /// Mutable access for late stages such as storage resolution.
    pub fn guests_mut(&mut self) -> &mut Guests {
        &mut self.guests
    }

    /// The loopback allocation.
    #[must_use]
    pub fn loopbacks(&self) -> &LoopbackMap {
        &self.loopbacks
    }

    /// Lists the links between guests.
    ///
    /// # Errors
    ///
    /// See [`derive_connections`].
    pub fn connections(&self, context: &Context, unique: bool) -> Result<Vec<Connection>> {
        derive_connections(&self.guests, context.interface_maps(), unique)
    }

    /// Resolves the template model.
    ///
    /// # Errors
    ///
    /// See [`RenderModel::build`].
    pub fn render_model<'a>(&'a self, context: &'a Context) -> Result<RenderModel<'a>> {
        RenderModel::build(&self.guests, &self.loopbacks, context.interface_maps())
    }
}

/// Schema-checks every guest of a raw data document.
///
/// Error paths start with the guest name.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the document is not a non-empty
/// mapping with string keys.
pub fn validate_document(document: &Value) -> Result<Vec<FieldError>> {
    validate_entries(&guest_entries(document)?)
}

fn validate_entries(entries: &[(&str, &Value)]) -> Result<Vec<FieldError>> {
    let schema = Schema::guest()?;
    let mut errors = Vec::new();
    for (name, raw) in entries {
        if raw.is_mapping() {
            errors.extend(schema.validate_at(name, raw)?);
        } else {
            errors.push(FieldError::new(*name, "must be of dict type"));
        }
    }
    Ok(errors)
}

fn guest_entries(document: &Value) -> Result<Vec<(&str, &Value)>> {
    let Value::Mapping(map) = document else {
        return Err(Error::InvalidArgument {
            reason: "guest data must be a mapping of guest name to guest".to_string(),
        });
    };
    if map.is_empty() {
        return Err(Error::InvalidArgument {
            reason: "guest data has no guests".to_string(),
        });
    }
    map.iter()
        .map(|(key, value)| {
            key.as_str()
                .map(|name| (name, value))
                .ok_or_else(|| Error::InvalidArgument {
                    reason: format!("guest name {key:?} is not a string"),
                })
        })
        .collect()
}
