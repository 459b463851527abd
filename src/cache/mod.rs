//! Cache Module
//!
//! Provides the in-memory TTL store used for API responses.

mod clock;
mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::time::Duration;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// TTL applied when a caller does not pass one
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// TTL for the catalog listing, which rarely changes
pub const LISTING_TTL: Duration = Duration::from_secs(30 * 60);

/// Interval between background sweeps of expired entries
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(10 * 60);
