//! Stderr logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive (e.g. `debug`).
pub const LOG_ENV: &str = "FORECAST_LOG";

/// Install a stderr `tracing` subscriber.
///
/// `FORECAST_LOG` from the process environment, then from `.env`, wins over
/// `default_level`. Calling this twice is harmless: the second install is ignored.
pub fn init(default_level: &str) {
    let directive = log_directive(std::env::var(LOG_ENV).ok(), dotenv_pairs());
    let filter = directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}

/// `.env` entries, read without touching the process environment.
fn dotenv_pairs() -> impl Iterator<Item = (String, String)> {
    dotenvy::dotenv_iter()
        .into_iter()
        .flatten()
        .filter_map(Result::ok)
}

/// Pick the log directive: the process environment first, then `.env`.
fn log_directive(
    from_env: Option<String>,
    mut dotenv: impl Iterator<Item = (String, String)>,
) -> Option<String> {
    from_env.or_else(|| dotenv.find(|(key, _)| key == LOG_ENV).map(|(_, value)| value))
}
