//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use super::clock::duration_ms;

// == Cache Entry ==
/// A stored value together with the moment it was written and its TTL.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Write timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Time-to-live measured from `stored_at`
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry written at `now_ms`.
    pub fn new(value: V, now_ms: u64, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: now_ms,
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// Boundary condition: an entry is still valid when exactly `ttl` has
    /// elapsed and expires on the first millisecond past it.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) > self.ttl_ms()
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds at `now_ms`, zero once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.ttl_ms().saturating_sub(self.elapsed_ms(now_ms))
    }

    fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }

    fn ttl_ms(&self) -> u64 {
        duration_ms(self.ttl)
    }
}
