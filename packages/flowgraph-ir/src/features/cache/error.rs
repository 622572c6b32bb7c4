//! Error types for the extraction cache

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

pub type CacheResult<T> = Result<T, CacheError>;
