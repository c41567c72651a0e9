//! Tracing subscriber initialization.
//!
//! Installs a single global subscriber at startup, configured from
//! [`LoggerSettings`]. No process-wide logger singletons beyond the
//! subscriber itself: everything is derived from the loaded settings.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerSettings;

/// Builds the level filter for the given settings.
///
/// An explicit `RUST_LOG` environment variable always wins over the
/// configured level.
fn build_filter(settings: &LoggerSettings) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&settings.level)
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", settings.level, e))
}

/// Initializes the global tracing subscriber from logger settings.
///
/// # Errors
/// Returns an error if the configured level is not a valid filter
/// directive or if a global subscriber is already installed.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = if settings.console.enabled {
        build_filter(settings)?
    } else {
        EnvFilter::new("off")
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.console.colored)
        .with_target(true);

    let result = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_level_builds_filter() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            ..Default::default()
        };
        assert!(build_filter(&settings).is_ok());
    }

    #[test]
    fn test_directive_syntax_is_accepted() {
        let settings = LoggerSettings {
            level: "info,escola_api=trace".to_string(),
            ..Default::default()
        };
        assert!(build_filter(&settings).is_ok());
    }
}
