//! Error types for the Vigil core library.
//!
//! A single error enum covers configuration loading, monitor probes, and
//! summary fetches. Transient errors are the ones the dashboard recovers
//! from on its own: the next poll tick is the retry.

use thiserror::Error;
use tracing::{error, warn};

/// The main error type for the Vigil core library.
#[derive(Debug, Error)]
pub enum VigilError {
    /// Configuration file could not be read or parsed
    #[error("failed to load configuration: {0}")]
    ConfigLoad(String),

    /// Configuration value is out of range or malformed
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    /// A monitor failed to probe its agent
    #[error("monitor probe failed for '{agent}': {message}")]
    MonitorProbe { agent: String, message: String },

    /// The backend could not produce a summary
    #[error("agent summary unavailable: {0}")]
    SummaryUnavailable(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VigilError {
    /// Returns true if the operation may succeed on a later poll tick.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            VigilError::MonitorProbe { .. } | VigilError::SummaryUnavailable(_)
        )
    }

    /// Log this error with severity matched to whether it is recoverable.
    pub fn log(&self) {
        if self.is_transient() {
            warn!("transient error: {}", self);
        } else {
            error!("error: {}", self);
        }
    }
}

impl From<config::ConfigError> for VigilError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => VigilError::InvalidConfigValue {
                key,
                message: "key not found".to_string(),
            },
            other => VigilError::ConfigLoad(other.to_string()),
        }
    }
}

/// Result type alias for Vigil operations.
pub type VigilResult<T> = Result<T, VigilError>;
