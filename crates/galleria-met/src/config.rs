//! Public configuration for the collection API client.
//!
//! This module provides a stable public API for configuring the Met
//! client. The internal config is derived from this.

use std::time::Duration;

/// Base path of the Met Open Access collection API.
pub(crate) const DEFAULT_BASE_URL: &str =
    "https://collectionapi.metmuseum.org/public/collection/v1";

/// Configuration for the Met collection client.
///
/// Use the builder pattern methods to customize the client
/// configuration.
///
/// # Example
///
/// ```
/// use galleria_met::MetClientConfig;
/// use std::time::Duration;
///
/// let config = MetClientConfig::new()
///     .with_search_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct MetClientConfig {
    /// Base URL for the collection API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Timeout for search requests
    pub(crate) search_timeout: Duration,
    /// Timeout for department and object requests
    pub(crate) detail_timeout: Duration,
    /// How long the department catalog stays cached
    pub(crate) catalog_ttl: Duration,
    /// How long a search result stays cached
    pub(crate) search_ttl: Duration,
    /// How long an object record stays cached
    pub(crate) object_ttl: Duration,
}

impl Default for MetClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("galleria-met/", env!("CARGO_PKG_VERSION")).to_string(),
            search_timeout: Duration::from_secs(25),
            detail_timeout: Duration::from_secs(20),
            // Departments and object records are near-immutable museum
            // metadata; search reflects live user intent and goes stale
            // fast.
            catalog_ttl: Duration::from_secs(3600),
            search_ttl: Duration::from_secs(60),
            object_ttl: Duration::from_secs(3600),
        }
    }
}

impl MetClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the collection API.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the timeout for search requests.
    ///
    /// Defaults to 25 seconds.
    #[must_use]
    pub const fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Set the timeout for department and object requests.
    ///
    /// Defaults to 20 seconds.
    #[must_use]
    pub const fn with_detail_timeout(mut self, timeout: Duration) -> Self {
        self.detail_timeout = timeout;
        self
    }

    /// Set how long the department catalog stays cached.
    ///
    /// Defaults to one hour.
    #[must_use]
    pub const fn with_catalog_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_ttl = ttl;
        self
    }

    /// Set how long a search result stays cached.
    ///
    /// Defaults to 60 seconds.
    #[must_use]
    pub const fn with_search_ttl(mut self, ttl: Duration) -> Self {
        self.search_ttl = ttl;
        self
    }

    /// Set how long an object record stays cached.
    ///
    /// Defaults to one hour.
    #[must_use]
    pub const fn with_object_ttl(mut self, ttl: Duration) -> Self {
        self.object_ttl = ttl;
        self
    }
}
