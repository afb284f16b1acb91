//! Logging setup for namewright binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is
//! left to whichever binary embeds them, through [`init`].

use std::env;
use std::str::FromStr;

use time::{format_description, UtcOffset};
use tracing::Level;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;

/// Error type for telemetry initialisation failures.
///
/// Kept separate from `namewright-core` errors; callers map it into their
/// own error types as needed.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Provided log level string could not be parsed.
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    /// Failed to configure the subscriber (should be rare).
    #[error("failed to init telemetry: {0}")]
    SubscriberInit(String),
}

/// Result alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Default filter when neither a level nor `RUST_LOG` is given.
///
/// The CLI prints names on stdout; logs go to stderr and stay quiet unless
/// asked for.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialise the global logging subscriber.
///
/// # Parameters
///
/// - `level`: Optional log level string. If `None`, the function will:
///   - Respect `RUST_LOG` if it is set, or
///   - Default to [`DEFAULT_LEVEL`] otherwise.
///   If `Some(level)` is provided, it takes precedence over `RUST_LOG`.
///
/// # Behavior
///
/// - Logs are written to stderr with timestamps, level, and target.
/// - A single global subscriber is installed; a second call returns
///   [`TelemetryError::SubscriberInit`].
///
/// ```ignore
/// namewright_telemetry::init(Some("debug"))?;
/// ```
pub fn init(level: Option<&str>) -> Result<()> {
    let filter = if let Some(level_str) = level {
        parse_level_filter(level_str)?
    } else if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(DEFAULT_LEVEL)
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_timer(OffsetTime::new(
            // Local offset when it can be determined, UTC otherwise.
            UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
            format_description::parse(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]",
            )
            .unwrap_or_else(|_| Vec::new()),
        ));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    Ok(())
}

/// Parse a simple level string into an `EnvFilter`.
///
/// Supports both plain levels ("info", "debug", etc.) and full `EnvFilter`
/// expressions (like "warn,namewright_core=debug").
fn parse_level_filter(level_str: &str) -> Result<EnvFilter> {
    if Level::from_str(level_str).is_ok() {
        return Ok(EnvFilter::new(level_str));
    }

    EnvFilter::builder()
        .parse(level_str)
        .map_err(|e| TelemetryError::InvalidLevel(format!("{} ({})", level_str, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_level() {
        assert!(parse_level_filter("info").is_ok());
    }

    #[test]
    fn parse_full_expression() {
        assert!(parse_level_filter("warn,namewright_core=debug").is_ok());
    }

    #[test]
    fn error_messages() {
        let err = TelemetryError::InvalidLevel("loud".into());
        assert_eq!(err.to_string(), "invalid log level: loud");
    }
}
