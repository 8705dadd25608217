//! Structured logging setup.

use crate::config::{LogFormat, LoggingConfig};
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive string could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// The rejected directive string.
        directive: String,
        /// Parser failure.
        #[source]
        source: ParseError,
    },
}

/// Installs the global tracing subscriber described by `config`.
///
/// Returns `Ok(false)` when another subscriber was already installed, for
/// example by a test harness; that subscriber stays in place.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the filter directive is
/// malformed.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, TelemetryError> {
    let filter =
        EnvFilter::try_new(&config.filter).map_err(|source| TelemetryError::InvalidFilter {
            directive: config.filter.clone(),
            source,
        })?;

    let layer = match config.format {
        LogFormat::Pretty => fmt::layer().with_target(true).with_filter(filter).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_filter(filter)
            .boxed(),
    };

    let installed = tracing_subscriber::registry().with(layer).try_init().is_ok();
    if installed {
        tracing::info!(filter = %config.filter, format = ?config.format, "logging initialized");
    } else {
        tracing::debug!("global tracing subscriber already installed, keeping it");
    }
    Ok(installed)
}
