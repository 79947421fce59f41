//! CLI command implementations.

pub mod check;
pub mod render;
pub mod version;

use std::path::Path;

use crdb_config::Connection;
use tracing::debug;

use crate::cli::ConfigFormat;
use crate::error::CliResult;

/// Load a connection config, honoring an explicit format override.
fn load_config(path: &Path, format: Option<ConfigFormat>) -> CliResult<Connection> {
    debug!(path = %path.display(), format = ?format, "Loading config");

    let conn = match format {
        Some(format) => Connection::from_file_as(path, format.into())?,
        None => Connection::from_file(path)?,
    };
    Ok(conn)
}
