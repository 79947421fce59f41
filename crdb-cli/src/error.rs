//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

use crdb_config::ConfigError;
use crdb_dsn::DsnError;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Config loading error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(crdb::config))]
    Config(#[from] ConfigError),

    /// DSN rendering error
    #[error("DSN error: {0}")]
    #[diagnostic(code(crdb::dsn))]
    Dsn(#[from] DsnError),
}
