//! Structured logging setup
//!
//! Every service installs one `tracing` subscriber at startup. `RUST_LOG`
//! overrides the configured level when present.

use crate::{Error, Result};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    /// Human readable, for local development
    Pretty,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(Error::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Build the level filter: `RUST_LOG` if set, otherwise `level`
///
/// Unknown level names fall back to `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(level.trim().to_ascii_lowercase()).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber for `service_name`
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(service_name: &str, level: &str, format: LogFormat) -> Result<()> {
    let filter = env_filter(level);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    installed.map_err(|e| Error::Internal(format!("Failed to install log subscriber: {}", e)))?;
    tracing::debug!(service = service_name, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!(" text ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_default_format_is_json() {
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn test_second_init_fails() {
        // First call may fail too if another test installed a subscriber
        let _ = init_logging("test", "debug", LogFormat::Pretty);
        assert!(init_logging("test", "debug", LogFormat::Json).is_err());
    }
}
