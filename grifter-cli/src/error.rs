//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use grifter::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Config or guest defaults could not be loaded.
    Config(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Guest data failed validation
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error, including unreadable templates and backups
    ///   that already exist
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::InvalidDocument { .. } | LibError::Validation { .. } => 1,
                LibError::InvalidArgument { .. } => 4,
                LibError::Io(_) => 5,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) | CliError::Config(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grifter::{FieldError, Violation};

    #[test]
    fn test_validation_failure_exits_one() {
        let err = CliError::from(LibError::InvalidDocument {
            document: "guest data".to_string(),
            violations: vec![Violation::from(FieldError::new("sw01", "unknown field"))],
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_error_exits_seven() {
        let err = CliError::Config(LibError::InvalidDocument {
            document: "config.yml".to_string(),
            violations: Vec::new(),
        });
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().starts_with("Configuration error: config.yml"));
    }

    #[test]
    fn test_empty_data_document_exits_four() {
        let err = CliError::from(LibError::InvalidArgument {
            reason: "list of guests is empty".to_string(),
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_unreadable_template_exits_six() {
        let err = CliError::from(LibError::InvalidPath {
            path: "custom.tera".into(),
            reason: "failed to read template: No such file or directory".to_string(),
        });
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn test_io_exits_five() {
        let err = CliError::from(std::io::Error::other("disk full"));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_storage_error_exits_six() {
        let err = CliError::from(LibError::StorageVolumeNotFound {
            path: "/fake/volume1.qcow2".into(),
        });
        assert_eq!(err.exit_code(), 6);
    }
}
