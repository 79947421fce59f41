//! Logging setup controlled by the `CRDB_DEBUG` environment variable.
//!
//! # Environment Variables
//!
//! - `CRDB_DEBUG=true` / `CRDB_DEBUG=1` - Enable debug logging
//! - `CRDB_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `CRDB_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! Library code only emits `tracing` events; nothing is printed until a
//! subscriber is installed, either by the application or by [`init`] with the
//! `tracing-subscriber` feature enabled.
//!
//! ```rust,no_run
//! crdb_dsn::logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Targets covered by the filter installed in [`init`].
const TARGETS: [&str; 4] = ["crdb", "crdb_config", "crdb_dsn", "crdb_cli"];

/// Check if debug logging is enabled via `CRDB_DEBUG`.
///
/// Returns `true` if `CRDB_DEBUG` is set to "true", "1", or "yes" (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("CRDB_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `CRDB_LOG_LEVEL`.
///
/// Defaults to "debug" if `CRDB_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };

    match env::var("CRDB_LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// Get the configured log format from `CRDB_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var("CRDB_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Build the `EnvFilter` directive string for a level.
pub fn filter_directive(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize logging. Subsequent calls are no-ops.
///
/// Nothing is installed unless `CRDB_DEBUG` or `CRDB_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("CRDB_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(filter_directive(level))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match get_log_format() {
                "json" => registry.with(fmt::layer().json()).try_init(),
                "compact" => registry.with(fmt::layer().compact()).try_init(),
                _ => registry.with(fmt::layer().pretty()).try_init(),
            };

            if installed.is_ok() {
                tracing::info!(
                    level = level,
                    format = get_log_format(),
                    "crdb logging initialized"
                );
            }
        }
    });
}
