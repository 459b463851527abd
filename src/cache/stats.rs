//! Cache Statistics Module
//!
//! Diagnostic snapshot of a TTL store: its current keys plus hit, miss and
//! expiry counters.

use serde::Serialize;

// == Cache Stats ==
/// Diagnostics for a TTL store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Current number of entries in the store
    pub size: usize,
    /// Keys currently held, sorted
    pub keys: Vec<String>,
    /// Number of reads answered from the store
    pub hits: u64,
    /// Number of reads that found nothing valid
    pub misses: u64,
    /// Number of entries dropped because their TTL elapsed
    pub expired: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }
}
