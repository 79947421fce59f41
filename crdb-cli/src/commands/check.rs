//! `crdb check` command - Validate a config file and summarize it.

use crdb_config::{Connection, Parameters};
use crdb_dsn::{render, render_options, render_redacted};

use crate::cli::CheckArgs;
use crate::error::CliResult;
use crate::output::{self, field};

/// Run the check command
pub fn run(args: CheckArgs) -> CliResult<()> {
    output::title("Check Connection Config");

    let conn = super::load_config(&args.config, args.format)?;

    // Rendering performs the required-field checks
    render(&conn)?;
    let redacted = render_redacted(&conn)?;

    output::group("Connection");
    field("config", &args.config.display().to_string());
    field("host", &conn.host);
    field("port", &conn.port.to_string());
    field("database", &conn.database);
    field("user", &conn.user);
    output::blank();

    output::group("Parameters");
    let params = parameter_summary(&conn);
    if params.is_empty() {
        output::empty();
    }
    for (key, value) in &params {
        output::param(key, value);
    }
    output::blank();

    output::group("DSN");
    output::dsn(&redacted);
    output::blank();

    output::ok("Config is valid!");
    Ok(())
}

/// The query parameters the DSN will carry, in output order.
fn parameter_summary(conn: &Connection) -> Vec<(&'static str, String)> {
    let Some(params) = conn.parameters.as_ref() else {
        return Vec::new();
    };
    let Parameters {
        application_name,
        ssl_mode,
        ssl_cert,
        ssl_key,
        ssl_root_cert,
        options,
    } = params;

    let mut lines = Vec::new();
    let mut push = |key: &'static str, value: Option<&str>| {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            lines.push((key, value.to_string()));
        }
    };

    push("application_name", application_name.as_deref());
    push(
        "options",
        options.as_ref().and_then(render_options).as_deref(),
    );
    push("sslcert", ssl_cert.as_deref());
    push("sslkey", ssl_key.as_deref());
    push("sslmode", Some(ssl_mode.as_str()));
    push("sslrootcert", ssl_root_cert.as_deref());

    lines
}
