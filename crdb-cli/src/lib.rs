//! crdb CLI - render and check CockroachDB connection configs from the shell.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
