//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crdb_config::Format;

/// crdb - CockroachDB connection string tool
#[derive(Parser, Debug)]
#[command(name = "crdb")]
#[command(version)]
#[command(about = "crdb - render CockroachDB connection configs into DSNs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the DSN for a config file
    Render(RenderArgs),

    /// Validate a config file and summarize it
    Check(CheckArgs),

    /// Display version information
    Version,
}

/// Arguments for the `render` command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the connection config (.json, .yaml, .yml or .toml)
    pub config: PathBuf,

    /// Config format, overriding the file extension
    #[arg(short, long)]
    pub format: Option<ConfigFormat>,

    /// Print the password instead of masking it
    #[arg(long)]
    pub show_password: bool,
}

/// Arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the connection config (.json, .yaml, .yml or .toml)
    pub config: PathBuf,

    /// Config format, overriding the file extension
    #[arg(short, long)]
    pub format: Option<ConfigFormat>,
}

/// Config file formats accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl From<ConfigFormat> for Format {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Json => Format::Json,
            ConfigFormat::Yaml => Format::Yaml,
            ConfigFormat::Toml => Format::Toml,
        }
    }
}
