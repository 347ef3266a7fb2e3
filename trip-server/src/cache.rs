//! Caching layer for routing backend responses.
//!
//! Driving routes between the same pair of cities rarely change, so OSRM
//! answers are cached in memory. Coordinates are snapped to a grid so that
//! tiny floating-point differences share a cache entry.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::geo::{LatLon, RouteEstimate};
use crate::osrm::{OsrmClient, RoutingError};

/// Cache key: (start lat, start lon, end lat, end lon) in grid cells.
type RouteKey = (i64, i64, i64, i64);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Grid cells per degree used to snap coordinates.
    pub cells_per_degree: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
            cells_per_degree: 10_000.0, // ~11 m at the equator
        }
    }
}

/// Cache for routing responses.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEstimate>,
    cells_per_degree: f64,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            routes,
            cells_per_degree: config.cells_per_degree.max(1.0),
        }
    }

    /// Snap a directed pair of points to a cache key.
    fn key(&self, start: LatLon, end: LatLon) -> RouteKey {
        let cell = |deg: f64| (deg * self.cells_per_degree).round() as i64;
        (cell(start.lat), cell(start.lon), cell(end.lat), cell(end.lon))
    }

    pub async fn get(&self, start: LatLon, end: LatLon) -> Option<RouteEstimate> {
        self.routes.get(&self.key(start, end)).await
    }

    pub async fn insert(&self, start: LatLon, end: LatLon, estimate: RouteEstimate) {
        self.routes.insert(self.key(start, end), estimate).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// OSRM client with caching.
///
/// Only successful routes are cached; failures always hit the backend again.
pub struct CachedOsrmClient {
    client: OsrmClient,
    cache: RouteCache,
}

impl CachedOsrmClient {
    /// Create a new cached client.
    pub fn new(client: OsrmClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Driving route between two points, using the cache if available.
    pub async fn route_driving(
        &self,
        start: LatLon,
        end: LatLon,
    ) -> Result<RouteEstimate, RoutingError> {
        if let Some(cached) = self.cache.get(start, end).await {
            return Ok(cached);
        }

        let estimate = self.client.route_driving(start, end).await?;
        self.cache.insert(start, end, estimate).await;

        Ok(estimate)
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
