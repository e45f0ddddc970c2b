//! `tracing` subscriber setup for the binary.

use tracing::warn;
use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "info";

/// Install the global `tracing` subscriber. Logs go to stderr so they never
/// interleave with the rendered view on stdout. Calling this twice is a no-op.
///
/// An unparsable `filter` falls back to `info` and is reported once the
/// subscriber is up.
pub fn init(filter: &str) {
    let (env_filter, rejected) = parse_filter(filter);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if let (true, Some(reason)) = (installed, rejected) {
        warn!(filter, %reason, "invalid log filter, using {FALLBACK_FILTER}");
    }
}

/// Parse `filter`, returning the fallback filter and the parse error when it
/// is invalid.
fn parse_filter(filter: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_FILTER), Some(e.to_string())),
    }
}
