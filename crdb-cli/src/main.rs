//! crdb CLI - render and check CockroachDB connection configs from the shell.

use clap::Parser;

use crdb_cli::cli::{Cli, Command};
use crdb_cli::commands;
use crdb_cli::error::CliResult;
use crdb_cli::output;

fn main() {
    crdb_dsn::logging::init();

    if let Err(e) = run() {
        output::fail(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => commands::render::run(args),
        Command::Check(args) => commands::check::run(args),
        Command::Version => commands::version::run(),
    }
}
