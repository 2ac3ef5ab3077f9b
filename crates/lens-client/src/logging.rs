//! Tracing initialization for binaries and tests embedding the client.

use std::sync::Once;

use lens_core::config::ObservabilityConfig;
use lens_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize tracing with the default `lens_client=info,lens_core=info` filter.
///
/// `LENS_LOG` overrides the filter, e.g. `LENS_LOG=lens_client=debug`.
/// Idempotent; a subscriber installed elsewhere is left in place.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing from the `[observability]` section of the config.
pub fn init_from_config(config: &ObservabilityConfig) {
    let fallback = crate_filter(&config.log_level);
    let json = config.json;
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));
        install(filter, json);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter, false));
}

fn crate_filter(level: &str) -> String {
    format!("lens_client={level},lens_core={level}")
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("global subscriber already set, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_filter_covers_both_crates() {
        assert_eq!(crate_filter("debug"), "lens_client=debug,lens_core=debug");
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_tracing();
        init_tracing();
        init_tracing_with_filter("lens_client=trace");
    }
}
