use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset. Diagnostics go to stdout, so the
/// log stream on stderr stays quiet unless asked for.
pub const DEFAULT_FILTER: &str = "warn,hyper=warn,reqwest=warn";

/// Set `GIXAT_SMOKE_LOG_JSON=1` to emit JSON log lines instead of the compact format.
pub const JSON_LOG_ENV: &str = "GIXAT_SMOKE_LOG_JSON";

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let json = std::env::var(JSON_LOG_ENV).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
