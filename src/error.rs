//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Cache operations
//! themselves are total; only construction can fail.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No Tokio runtime is available to host the sweep task
    #[error("No Tokio runtime available to run the sweep task")]
    NoRuntime,

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
