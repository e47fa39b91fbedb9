//! Logging integration for the dk-modelfields crates.
//!
//! The status definition parser reports skipped lines through [`tracing`];
//! applications that want to see those diagnostics can call
//! [`setup_logging`] early in startup (or install their own subscriber).

/// Sets up the global tracing subscriber.
///
/// `level` is an env-filter directive (e.g. "debug", "info",
/// "dk_modelfields_db=warn"). With `debug` a pretty, human-readable format
/// is used; otherwise a structured JSON format.
///
/// Installing a subscriber twice is a no-op, so this is safe to call from
/// tests.
pub fn setup_logging(level: &str, debug: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_is_idempotent() {
        setup_logging("info", true);
        setup_logging("debug", false);
        tracing::info!("still alive");
    }
}
