//! Terminal output for the `crdb` commands.
//!
//! Command results go to stdout, failures to stderr.

use owo_colors::OwoColorize;

/// Width of the label column in [`field`] listings.
const LABEL_WIDTH: usize = 10;

/// Print a command title followed by a blank line.
pub fn title(text: &str) {
    println!("{}", text.bold().cyan());
    println!();
}

/// Print the name of a group of fields.
pub fn group(name: &str) {
    println!("{}", name.bold());
}

/// Print an aligned `label value` line inside a group.
pub fn field(label: &str, value: &str) {
    println!("  {} {}", format!("{label:<LABEL_WIDTH$}").dimmed(), value);
}

/// Print one DSN query parameter as `key = value`.
pub fn param(key: &str, value: &str) {
    println!("  {}", format!("{key} = {value}").yellow());
}

/// Placeholder for a group with nothing in it.
pub fn empty() {
    println!("  {}", "(none)".dimmed());
}

/// Print a rendered DSN.
pub fn dsn(dsn: &str) {
    println!("  {}", dsn.underline());
}

pub fn blank() {
    println!();
}

/// Print a success line.
pub fn ok(text: &str) {
    println!("{} {}", "✔".green().bold(), text.green());
}

/// Print a failure line to stderr.
pub fn fail(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}
