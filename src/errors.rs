//! Error types for graph_poet
//!
//! The only failure in the graph core is an out-of-range edge weight.
//! Configuration, file loading and JSON handling add their own variants.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PoetError>;

/// Main error type for graph_poet
#[derive(Error, Debug)]
pub enum PoetError {
    /// An edge weight was negative
    #[error("Invalid weight: {weight} (edge weights must be non-negative)")]
    InvalidWeight { weight: i64 },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Reading the corpus failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PoetError {
    /// Create an invalid weight error
    pub fn invalid_weight(weight: i64) -> Self {
        Self::InvalidWeight { weight }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was caused by a negative edge weight
    pub fn is_invalid_weight(&self) -> bool {
        matches!(self, Self::InvalidWeight { .. })
    }
}

impl From<serde_json::Error> for PoetError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
