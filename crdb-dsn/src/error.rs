//! Error types for DSN rendering and parsing.

use crdb_config::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for DSN operations.
pub type DsnResult<T> = Result<T, DsnError>;

/// Errors that can occur while rendering or parsing a DSN.
#[derive(Error, Debug, Diagnostic)]
pub enum DsnError {
    /// A field the DSN cannot be built without is empty or zero.
    #[error("missing required field: {field}")]
    #[diagnostic(code(crdb::dsn::missing_required_field))]
    MissingRequiredField { field: &'static str },

    /// The input string is not a DSN this crate understands.
    #[error("invalid DSN: {0}")]
    #[diagnostic(code(crdb::dsn::invalid_dsn))]
    InvalidDsn(String),

    /// A configuration value could not be decoded.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

impl DsnError {
    /// Create a missing required field error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField { field }
    }

    /// Create an invalid DSN error.
    pub fn invalid_dsn(message: impl Into<String>) -> Self {
        Self::InvalidDsn(message.into())
    }

    /// Check if this is a missing required field error.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingRequiredField { .. })
    }

    /// Name of the missing field, if this is a missing required field error.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredField { field } => Some(*field),
            _ => None,
        }
    }
}
