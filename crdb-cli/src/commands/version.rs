//! `crdb version` command - Display version information.

use crate::error::CliResult;
use crate::output::{self, field};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub fn run() -> CliResult<()> {
    output::title("crdb");

    field("Version", VERSION);
    field("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    field("Build", build_mode);
    output::blank();

    output::group("Components");
    field("crdb-config", env!("CARGO_PKG_VERSION"));
    field("crdb-dsn", env!("CARGO_PKG_VERSION"));

    Ok(())
}
