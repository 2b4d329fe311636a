//! TTL Cache demo
//!
//! Stores one expiring and one permanent entry, reads them back, waits for
//! the first to expire and reads again.

use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_cache::{CacheConfig, TtlCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_cache=info,ttl_cache_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CacheConfig::from_env();
    info!("Sweep interval: {:?}", config.sweep_interval);

    let cache = TtlCache::try_with_config(config)?;

    cache.set("key1", "value1".to_string(), Duration::from_secs(5));
    cache.set("key2", "value2".to_string(), Duration::ZERO);

    report(&cache, "key1");

    tokio::time::sleep(Duration::from_secs(6)).await;

    report(&cache, "key1");
    report(&cache, "key2");

    cache.shutdown().await;
    Ok(())
}

fn report(cache: &TtlCache<String>, key: &str) {
    match cache.get(key) {
        Some(value) => info!("{}: {}", key, value),
        None => info!("{} not found", key),
    }
}
