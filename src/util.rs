use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Logs go to stderr; stdout carries only the report.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let default_filter = if verbose { "check_redirects=debug,info" } else { "warn" };
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    });
}
