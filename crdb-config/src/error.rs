//! Error types for configuration decoding and loading.

// These warnings are false positives - the fields are used by derive macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while decoding or loading a connection configuration.
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    /// A closed enumeration received a token it does not know.
    #[error("invalid value `{value}` for `{field}`")]
    #[diagnostic(
        code(crdb::config::invalid_enum_value),
        help("expected one of: disable, allow, prefer, require, verify-ca, verify-full")
    )]
    InvalidEnumValue { field: String, value: String },

    /// Error reading a file.
    #[error("failed to read file: {path}")]
    #[diagnostic(code(crdb::config::io_error))]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON decoding error.
    #[error("failed to parse JSON")]
    #[diagnostic(code(crdb::config::json_error))]
    JsonError {
        #[source]
        source: serde_json::Error,
    },

    /// YAML decoding error.
    #[error("failed to parse YAML")]
    #[diagnostic(code(crdb::config::yaml_error))]
    YamlError {
        #[source]
        source: serde_yaml::Error,
    },

    /// TOML decoding error.
    #[error("failed to parse TOML")]
    #[diagnostic(code(crdb::config::toml_error))]
    TomlError {
        #[source]
        source: toml::de::Error,
    },

    /// The file extension does not map to a known format.
    #[error("unsupported config format: {path}")]
    #[diagnostic(
        code(crdb::config::unsupported_format),
        help("use a .json, .yaml, .yml or .toml file")
    )]
    UnsupportedFormat { path: String },
}

impl ConfigError {
    /// Create an invalid enum value error.
    pub fn invalid_enum(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Check if this error came from an unknown enum token.
    pub fn is_invalid_enum(&self) -> bool {
        matches!(self, Self::InvalidEnumValue { .. })
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonError { source }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::YamlError { source }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(source: toml::de::Error) -> Self {
        Self::TomlError { source }
    }
}
