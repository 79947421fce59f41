//! # crdb-config
//!
//! Typed configuration model for a CockroachDB connection.
//!
//! The model mirrors the structure of a connection settings document:
//!
//! ```yaml
//! user: root
//! password: secret
//! host: 127.0.0.1
//! port: 26257
//! database: defaultdb
//! parameters:
//!   application_name: billing
//!   sslmode: verify-full
//!   sslrootcert: certs/ca.crt
//!   options:
//!     cluster: blue-cluster
//!     variable:
//!       name: statement_timeout
//!       value: 10s
//! ```
//!
//! Every nested structure is optional. Documents can be loaded from JSON,
//! YAML or TOML:
//!
//! ```rust
//! use crdb_config::{Connection, Format, SslMode};
//!
//! let conn = Connection::decode(
//!     r#"{"user": "root", "password": "pw", "host": "localhost", "port": 26257,
//!         "database": "defaultdb", "parameters": {"sslmode": "require"}}"#,
//!     Format::Json,
//! )
//! .unwrap();
//!
//! assert_eq!(conn.parameters.unwrap().ssl_mode, SslMode::Require);
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod ssl;

pub use error::{ConfigError, ConfigResult};
pub use loader::{Format, expand_env_vars, expand_env_vars_with};
pub use model::{Connection, Options, Parameters, Variable};
pub use ssl::SslMode;
