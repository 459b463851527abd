//! Response DTOs for the HTTP surface
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for `GET /pokemon/:id/image`
#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub id: u32,
    pub shiny: bool,
    /// Resolved asset URL, possibly the placeholder
    pub url: String,
}

/// Response body for `GET /cache/stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cached API responses
    pub size: usize,
    /// Cached request URLs
    pub keys: Vec<String>,
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped after their TTL elapsed
    pub expired: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Number of image keys resolved so far
    pub images_resolved: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from response-cache statistics
    pub fn new(stats: CacheStats, images_resolved: usize) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            size: stats.size,
            keys: stats.keys,
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            hit_rate,
            images_resolved,
        }
    }
}

/// Response body for `DELETE /cache`
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} cached responses", cleared),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
