//! HTTP backend abstraction for the collection API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production
//! implementation uses reqwest. There is no retry logic anywhere:
//! every call is user-initiated and manually retriable, so a failure
//! is simply reported to the caller.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{MetError, MetResult};
use crate::models::MetConfig;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `CollectionPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON body.
    ///
    /// Fails with `ApiRequestFailed` on any non-2xx status and with
    /// `Timeout` when the request exceeds `timeout`.
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> MetResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &MetConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> MetResult<T> {
        let response = self
            .client
            .get(url.as_str())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MetError::Timeout {
                        timeout_secs: timeout.as_secs(),
                        url: url.to_string(),
                    }
                } else {
                    MetError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
