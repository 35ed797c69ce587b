//! Met collection client: departments, search and object records.
//!
//! This module provides the main client for the collection API. Each
//! operation checks its cache first, computes on a miss, and stores
//! only successful outcomes (plus, for objects, the absence outcome -
//! missing ids stay missing for the cache window).

mod departments;
mod objects;
mod search;

use url::Url;

use crate::cache::ResponseCaches;
use crate::config::{DEFAULT_BASE_URL, MetClientConfig};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::MetConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Met client using the reqwest HTTP backend.
pub type DefaultMetClient = MetClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Met Open Access collection API.
///
/// Generic over an HTTP backend for testability; use
/// [`DefaultMetClient`] in production code and interact with it
/// through the `CollectionPort` trait.
pub struct MetClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: MetConfig,
    pub(crate) caches: ResponseCaches,
}

impl DefaultMetClient {
    /// Create a new client with the given configuration.
    #[must_use]
    pub fn new(config: &MetClientConfig) -> Self {
        let internal_config = to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        let caches = ResponseCaches::new(&internal_config);
        Self {
            backend,
            config: internal_config,
            caches,
        }
    }

    /// Create a new client with default configuration.
    #[must_use]
    pub fn default_client() -> Self {
        Self::new(&MetClientConfig::default())
    }
}

impl<B: HttpBackend> MetClient<B> {
    /// Create a client with a custom backend, for testing against
    /// canned responses.
    #[cfg(test)]
    pub(crate) fn with_backend(config: MetConfig, backend: B) -> Self {
        let caches = ResponseCaches::new(&config);
        Self {
            backend,
            config,
            caches,
        }
    }
}

fn to_internal_config(config: &MetClientConfig) -> MetConfig {
    MetConfig {
        base_url: Url::parse(&config.base_url)
            .unwrap_or_else(|_| Url::parse(DEFAULT_BASE_URL).expect("default URL is valid")),
        user_agent: config.user_agent.clone(),
        search_timeout: config.search_timeout,
        detail_timeout: config.detail_timeout,
        catalog_ttl: config.catalog_ttl,
        search_ttl: config.search_ttl,
        object_ttl: config.object_ttl,
    }
}
