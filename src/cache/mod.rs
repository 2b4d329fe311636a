//! Cache Module
//!
//! Provides in-memory caching with per-entry TTL expiration.

mod entry;
mod store;
mod ttl_cache;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use ttl_cache::TtlCache;
