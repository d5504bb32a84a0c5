//! Logging initialization.
//!
//! Logs go to stderr through `tracing-subscriber`. The filter comes from
//! `UI_LOG`, then `RUST_LOG`, then the level chosen by the CLI flags.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Builds the filter for `default_directive`, letting the environment override it.
#[must_use]
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initializes the global tracing subscriber.
///
/// `None` (quiet mode) installs nothing unless `UI_LOG`/`RUST_LOG` is set.
/// Uses `try_init()` so calling this more than once is harmless.
pub fn init_logging(log_level: Option<&str>) {
    let env_set = std::env::var_os(LOG_ENV).is_some() || std::env::var_os("RUST_LOG").is_some();
    let Some(level) = log_level.or(env_set.then_some("off")) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_build_filter_uses_default_directive() {
        let saved = std::env::var_os(LOG_ENV);
        // SAFETY: serialized with other env-mutating tests
        unsafe { std::env::remove_var(LOG_ENV) };

        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(build_filter("debug").to_string(), "debug");
        }

        if let Some(value) = saved {
            unsafe { std::env::set_var(LOG_ENV, value) };
        }
    }

    #[test]
    #[serial]
    fn test_build_filter_prefers_ui_log() {
        let saved = std::env::var_os(LOG_ENV);
        // SAFETY: serialized with other env-mutating tests
        unsafe { std::env::set_var(LOG_ENV, "trace") };

        assert_eq!(build_filter("warn").to_string(), "trace");

        match saved {
            Some(value) => unsafe { std::env::set_var(LOG_ENV, value) },
            None => unsafe { std::env::remove_var(LOG_ENV) },
        }
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(Some("off"));
        init_logging(Some("off"));
    }
}
