//! `crdb render` command - Print the DSN for a config file.

use crdb_dsn::{render, render_redacted};

use crate::cli::RenderArgs;
use crate::error::CliResult;

/// Run the render command
///
/// Prints only the DSN so the output can be piped into other tools.
pub fn run(args: RenderArgs) -> CliResult<()> {
    let conn = super::load_config(&args.config, args.format)?;

    let dsn = if args.show_password {
        render(&conn)?
    } else {
        render_redacted(&conn)?
    };

    println!("{dsn}");
    Ok(())
}
