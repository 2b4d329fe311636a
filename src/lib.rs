//! TTL Cache - An in-process key-value cache
//!
//! Stores values with optional per-entry time-to-live. Expired entries are
//! dropped lazily on read and periodically by a background sweep task.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::TtlCache;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
