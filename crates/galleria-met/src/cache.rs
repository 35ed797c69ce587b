//! Read-through TTL caches for the three endpoints.
//!
//! One cache per endpoint, each with its own time-to-live. Lookups and
//! inserts are done manually by the client (get, compute, insert):
//! this keeps failed computations out of the cache and deliberately
//! avoids concurrent-request deduplication, which a single-user UI
//! does not need.

use galleria_core::{Artwork, Department, SearchHits};
use moka::future::Cache;

use crate::models::MetConfig;

/// Cache key for one search request: the normalized argument tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub query: String,
    pub has_images: bool,
    pub department_id: Option<u32>,
}

impl SearchKey {
    /// Build a key, trimming the query so "flower" and " flower " share
    /// an entry.
    pub fn new(query: &str, has_images: bool, department_id: Option<u32>) -> Self {
        Self {
            query: query.trim().to_string(),
            has_images,
            department_id,
        }
    }
}

/// The per-endpoint caches owned by one client instance.
pub struct ResponseCaches {
    /// Global entry keyed by "no arguments"
    pub departments: Cache<(), Vec<Department>>,
    /// Keyed per distinct (query, hasImages, departmentId) tuple
    pub search: Cache<SearchKey, SearchHits>,
    /// Keyed per object id; absences are cached too
    pub objects: Cache<u64, Option<Artwork>>,
}

impl ResponseCaches {
    /// Build the caches with the configured TTLs.
    pub fn new(config: &MetConfig) -> Self {
        Self {
            departments: Cache::builder()
                .max_capacity(1)
                .time_to_live(config.catalog_ttl)
                .build(),
            search: Cache::builder()
                .max_capacity(256)
                .time_to_live(config.search_ttl)
                .build(),
            objects: Cache::builder()
                .max_capacity(4096)
                .time_to_live(config.object_ttl)
                .build(),
        }
    }
}
