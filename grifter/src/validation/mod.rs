//! Validation of guest data and config documents.
//!
//! Every check reports through the same [`Violation`] type and every
//! validator collects all violations rather than stopping at the first one.
//! Callers turn a non-empty list into [`Error::InvalidDocument`] with
//! [`into_result`].
//!
//! - [`schema`]: declarative type/shape checks over raw YAML values
//! - [`cross_reference`]: box types, remote guests and port ranges over
//!   merged guests

pub mod cross_reference;
pub mod schema;

use std::fmt;

use crate::error::{Error, Result};
use crate::interface::InterfaceKind;

pub use cross_reference::CrossReferenceValidator;
pub use schema::{FieldType, Rule, Schema};

/// A single field-level schema violation.
///
/// # Examples
///
/// ```
/// use grifter::validation::FieldError;
///
/// let err = FieldError::new("sw01.vagrant_box.name", "empty values not allowed");
/// assert_eq!(err.to_string(), "sw01.vagrant_box.name: empty values not allowed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the offending field (`[i]` for list items).
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Any reason a document can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A declarative schema check failed.
    Schema(FieldError),

    /// A guest uses a box type that has no guest config entry.
    UnknownBoxType {
        /// The guest.
        guest: String,
        /// Its box name.
        box_name: String,
    },

    /// An interface points at a guest that is not declared.
    UnknownRemoteGuest {
        /// The guest declaring the interface.
        guest: String,
        /// The missing remote guest.
        remote_guest: String,
    },

    /// A guest asks for more data NICs than its box supports.
    TooManyDataInterfaces {
        /// The guest.
        guest: String,
        /// Its box name.
        box_name: String,
        /// Requested NIC count.
        requested: u32,
        /// Box maximum.
        maximum: u32,
    },

    /// A local port index is not mapped for the guest's box.
    LocalPortOutOfRange {
        /// The guest.
        guest: String,
        /// Interface category.
        kind: InterfaceKind,
        /// The offending index.
        port: u32,
    },

    /// A remote port index is not mapped for the remote guest's box.
    RemotePortOutOfRange {
        /// The guest declaring the interface.
        guest: String,
        /// The remote guest.
        remote_guest: String,
        /// Interface category.
        kind: InterfaceKind,
        /// The offending index.
        port: u32,
    },

    /// A guest declares a different number of internal interfaces than its box has.
    InternalInterfaceCount {
        /// The guest.
        guest: String,
        /// Its box name.
        box_name: String,
        /// Declared internal interfaces.
        declared: usize,
        /// Box internal interface count.
        expected: u32,
    },

    /// A guest's box type needs a partner box that no guest uses.
    MissingPartner {
        /// The guest.
        guest: String,
        /// Its box name.
        box_name: String,
        /// The partner box type.
        partner: String,
    },

    /// A guest pair refers to a box type with no guest config entry.
    UnknownPairBox {
        /// The pair key.
        box_name: String,
        /// The box that is not configured.
        missing: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(err) => write!(f, "{err}"),
            Self::UnknownBoxType { guest, box_name } => write!(
                f,
                "{guest}'s vagrant box type: {box_name} is not defined in the config file"
            ),
            Self::UnknownRemoteGuest {
                guest,
                remote_guest,
            } => write!(
                f,
                "{guest} references {remote_guest}, which is not defined in the guests file"
            ),
            Self::TooManyDataInterfaces {
                guest,
                box_name,
                requested,
                maximum,
            } => write!(
                f,
                "the number of data interfaces for {guest} ({requested}) is greater than the \
                 {box_name} maximum of {maximum}"
            ),
            Self::LocalPortOutOfRange { guest, kind, port } => write!(
                f,
                "{guest}'s {kind} local_port: {port} is outside the supported range"
            ),
            Self::RemotePortOutOfRange {
                guest,
                remote_guest,
                kind,
                port,
            } => write!(
                f,
                "error with {guest}'s interface config: {remote_guest}'s {kind} port: {port} \
                 is outside the supported range"
            ),
            Self::InternalInterfaceCount {
                guest,
                box_name,
                declared,
                expected,
            } => write!(
                f,
                "the number of internal interfaces for {guest}: {declared} is not equal to the \
                 {box_name} internal interfaces value: {expected}"
            ),
            Self::MissingPartner {
                guest,
                box_name,
                partner,
            } => write!(
                f,
                "{guest} is a {box_name}, which requires a {partner} guest in the topology"
            ),
            Self::UnknownPairBox { box_name, missing } => write!(
                f,
                "guest pair {box_name} refers to {missing}, which is not defined in guest_config"
            ),
        }
    }
}

impl From<FieldError> for Violation {
    fn from(err: FieldError) -> Self {
        Self::Schema(err)
    }
}

/// Converts a violation list into a result for the named document.
///
/// # Errors
///
/// Returns [`Error::InvalidDocument`] if `violations` is non-empty.
///
/// # Examples
///
/// ```
/// use grifter::validation::into_result;
///
/// assert!(into_result("guest data", Vec::new()).is_ok());
/// ```
pub fn into_result(document: &str, violations: Vec<Violation>) -> Result<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidDocument {
            document: document.to_string(),
            violations,
        })
    }
}
