//! Loading connection configuration from JSON, YAML and TOML documents.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::Connection;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
});

/// Structured document formats a connection can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON object.
    Json,
    /// YAML mapping.
    Yaml,
    /// TOML table.
    Toml,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Get the format name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Connection {
    /// Load a connection from a file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        Self::from_file_as(path, format)
    }

    /// Load a connection from a file in an explicit format.
    pub fn from_file_as(path: impl AsRef<Path>, format: Format) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), format = %format, "Loading connection config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&content, format)
    }

    /// Decode a connection from a document, expanding `${VAR}` placeholders
    /// from the process environment first.
    pub fn from_str(content: &str, format: Format) -> ConfigResult<Self> {
        let expanded = expand_env_vars(content);
        Self::decode(&expanded, format)
    }

    /// Decode a connection from a document verbatim.
    pub fn decode(content: &str, format: Format) -> ConfigResult<Self> {
        let conn: Self = match format {
            Format::Json => serde_json::from_str(content)?,
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Toml => toml::from_str(content)?,
        };

        debug!(
            host = %conn.host,
            port = conn.port,
            database = %conn.database,
            has_parameters = conn.parameters.is_some(),
            "Connection config decoded"
        );
        Ok(conn)
    }
}

/// Expand `${VAR_NAME}` placeholders from the process environment.
///
/// Unset variables are left as written.
pub fn expand_env_vars(content: &str) -> String {
    expand_env_vars_with(content, |name| std::env::var(name).ok())
}

/// Expand `${VAR_NAME}` placeholders using a custom lookup.
pub fn expand_env_vars_with<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ENV_VAR
        .replace_all(content, |caps: &regex_lite::Captures<'_>| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
