//! CockroachDB connection configuration model.

use serde::{Deserialize, Serialize};

use crate::ssl::SslMode;

/// Top-level CockroachDB connection settings.
///
/// Required fields default to empty so a partially filled document still
/// decodes; the DSN renderer reports whichever one is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Connection {
    /// Username.
    pub user: String,
    /// Password.
    pub password: String,
    /// Host name or address.
    pub host: String,
    /// Port (26257 for a stock CockroachDB node).
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Query parameters. `None` renders a DSN without a query string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

impl Connection {
    /// Create a connection from its required fields.
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            host: host.into(),
            port,
            database: database.into(),
            parameters: None,
        }
    }

    /// Set the query parameters.
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Drop the query parameters.
    pub fn without_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }
}

/// Optional query parameters of a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    /// Application name (shown in `crdb_internal.node_sessions`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,

    /// SSL mode.
    #[serde(
        rename = "sslmode",
        default,
        skip_serializing_if = "SslMode::is_unspecified"
    )]
    pub ssl_mode: SslMode,

    /// Path to the client certificate.
    #[serde(rename = "sslcert", default, skip_serializing_if = "Option::is_none")]
    pub ssl_cert: Option<String>,

    /// Path to the client key.
    #[serde(rename = "sslkey", default, skip_serializing_if = "Option::is_none")]
    pub ssl_key: Option<String>,

    /// Path to the CA certificate.
    #[serde(rename = "sslrootcert", default, skip_serializing_if = "Option::is_none")]
    pub ssl_root_cert: Option<String>,

    /// Composite `options` parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

impl Parameters {
    /// Create empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set application name.
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Set SSL mode.
    pub fn ssl_mode(mut self, mode: SslMode) -> Self {
        self.ssl_mode = mode;
        self
    }

    /// Set client certificate path.
    pub fn ssl_cert(mut self, path: impl Into<String>) -> Self {
        self.ssl_cert = Some(path.into());
        self
    }

    /// Set client key path.
    pub fn ssl_key(mut self, path: impl Into<String>) -> Self {
        self.ssl_key = Some(path.into());
        self
    }

    /// Set CA certificate path.
    pub fn ssl_root_cert(mut self, path: impl Into<String>) -> Self {
        self.ssl_root_cert = Some(path.into());
        self
    }

    /// Set the composite options.
    pub fn options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }
}

/// Driver flags packed into the single `options` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
    /// Cluster routing identifier (`--cluster=`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,

    /// Session variable override (`-c name=value`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<Variable>,
}

impl Options {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster identifier.
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set a session variable.
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variable = Some(Variable::new(name, value));
        self
    }
}

/// A session variable override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Variable {
    /// Variable name. An empty name means the variable is not set.
    pub name: String,
    /// Variable value.
    pub value: String,
}

impl Variable {
    /// Create a new variable.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Check if the variable carries a name.
    pub fn is_set(&self) -> bool {
        !self.name.is_empty()
    }
}
