//! The composite `options` query parameter.
//!
//! CockroachDB reads driver flags out of a single `options` value, e.g.
//! `--cluster=blue-cluster -c statement_timeout=10s`.

use crdb_config::{Options, Variable};
use tracing::debug;

const CLUSTER_FLAG: &str = "--cluster=";
const VARIABLE_FLAG: &str = "-c";

/// Render the `options` value. Returns `None` when no token is emitted, in
/// which case the parameter must be left out of the DSN entirely.
pub fn render_options(options: &Options) -> Option<String> {
    let mut tokens = Vec::with_capacity(2);

    if let Some(cluster) = options.cluster.as_deref().filter(|c| !c.is_empty()) {
        tokens.push(format!("{CLUSTER_FLAG}{cluster}"));
    }

    if let Some(var) = options.variable.as_ref().filter(|v| v.is_set()) {
        tokens.push(format!("{VARIABLE_FLAG} {}={}", var.name, var.value));
    }

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

/// Split a decoded `options` value back into its parts.
///
/// Unrecognized tokens are skipped. Only the last `-c` pair is kept.
pub fn parse_options(value: &str) -> Options {
    let mut options = Options::default();
    let mut tokens = value.split_whitespace();

    while let Some(token) = tokens.next() {
        if let Some(cluster) = token.strip_prefix(CLUSTER_FLAG) {
            options.cluster = Some(cluster.to_string());
        } else if token == VARIABLE_FLAG {
            if let Some((name, value)) = tokens.next().and_then(|pair| pair.split_once('=')) {
                options.variable = Some(Variable::new(name, value));
            }
        } else {
            debug!(token = %token, "Skipping unknown options token");
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_both_tokens() {
        let options = Options::new().cluster("cluster_id").variable("name", "value");
        assert_eq!(
            render_options(&options).as_deref(),
            Some("--cluster=cluster_id -c name=value")
        );
    }

    #[test]
    fn test_render_cluster_only() {
        let options = Options::new().cluster("cluster_id");
        assert_eq!(render_options(&options).as_deref(), Some("--cluster=cluster_id"));
    }

    #[test]
    fn test_render_variable_only() {
        let options = Options::new().variable("name", "value");
        assert_eq!(render_options(&options).as_deref(), Some("-c name=value"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_options(&Options::new()), None);

        // Empty strings behave like absence
        let options = Options {
            cluster: Some(String::new()),
            variable: Some(Variable::new("", "value")),
        };
        assert_eq!(render_options(&options), None);
    }

    #[test]
    fn test_render_variable_with_empty_value() {
        let options = Options::new().variable("search_path", "");
        assert_eq!(render_options(&options).as_deref(), Some("-c search_path="));
    }

    #[test]
    fn test_parse_options() {
        let options = parse_options("--cluster=cluster_id -c name=value");
        assert_eq!(options, Options::new().cluster("cluster_id").variable("name", "value"));

        let options = parse_options("-c name=value");
        assert_eq!(options, Options::new().variable("name", "value"));

        let options = parse_options("--cluster=cluster_id --unknown");
        assert_eq!(options, Options::new().cluster("cluster_id"));

        assert_eq!(parse_options(""), Options::default());
    }
}
