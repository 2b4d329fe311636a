//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored value and the instant it stops being served.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` after `now`.
    ///
    /// A zero `ttl` means the entry never expires. A `ttl` too large to be
    /// represented as an instant is treated the same way.
    pub fn new(value: V, ttl: Duration, now: Instant) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            now.checked_add(ttl)
        };

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired relative to `now`.
    ///
    /// Boundary condition: an entry is only expired once `now` is strictly
    /// past its expiration instant. At the exact instant it is still live.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }

    /// Checks if the entry has expired against the current clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new("test_value", Duration::ZERO, Instant::now());

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("test_value", Duration::from_secs(60), now);

        assert_eq!(entry.expires_at, Some(now + Duration::from_secs(60)));
        assert!(!entry.is_expired_at(now));
    }

    #[test]
    fn test_entry_expiration() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::from_secs(5), now);

        assert!(!entry.is_expired_at(now + Duration::from_secs(4)));
        assert!(entry.is_expired_at(now + Duration::from_secs(6)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::from_secs(5), now);
        let deadline = now + Duration::from_secs(5);

        assert!(!entry.is_expired_at(deadline), "live at the exact deadline");
        assert!(entry.is_expired_at(deadline + Duration::from_nanos(1)));
    }

    #[test]
    fn test_no_ttl_never_expires() {
        let now = Instant::now();
        let entry = CacheEntry::new(1u32, Duration::ZERO, now);

        assert!(!entry.is_expired_at(now + Duration::from_secs(10 * 365 * 24 * 3600)));
    }

    #[test]
    fn test_overflowing_ttl_never_expires() {
        let entry = CacheEntry::new(1u32, Duration::MAX, Instant::now());
        assert!(entry.expires_at.is_none());
    }
}
