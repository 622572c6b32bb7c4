//! Error types for flowgraph-ir
//!
//! The analysis core itself never fails; these cover the surfaces around it
//! (configuration loading, reading extractor output, cache construction).

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::cache::CacheError;

/// Main error type for flowgraph-ir operations
#[derive(Debug, Error)]
pub enum FlowgraphError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed extractor input or output serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Cache construction error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Output validation error, for hosts that treat validation as a gate
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FlowgraphError {
    pub fn validation(msg: impl Into<String>) -> Self {
        FlowgraphError::Validation(msg.into())
    }
}

/// Result type alias for flowgraph operations
pub type Result<T> = std::result::Result<T, FlowgraphError>;
