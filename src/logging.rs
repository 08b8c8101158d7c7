//! Logging bootstrap
//!
//! Events go to stderr so command output on stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither the environment nor the workspace config sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV: &str = "NOTEKEEPER_LOG";

/// Normalize a level name, rejecting anything tracing does not know.
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "Invalid log level: '{}'; expected trace|debug|info|warn|error",
            other
        )),
    }
}

/// Install the global subscriber.
///
/// `NOTEKEEPER_LOG` wins over `level`. Calling this more than once keeps the
/// first subscriber.
pub fn init_logging(level: &str) {
    let level = normalize_level(level).unwrap_or(DEFAULT_LOG_LEVEL);
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("notekeeper={}", level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
