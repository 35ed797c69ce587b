//! Search endpoint.

use galleria_core::SearchHits;
use tracing::debug;

use super::MetClient;
use crate::cache::SearchKey;
use crate::error::MetResult;
use crate::http::HttpBackend;
use crate::models::SearchResponse;
use crate::url::build_search_url;

impl<B: HttpBackend> MetClient<B> {
    /// Search for object ids matching a keyword.
    ///
    /// Results are cached per normalized `(query, hasImages,
    /// departmentId)` tuple for a short window; failures propagate and
    /// are never cached.
    pub(crate) async fn search_ids(
        &self,
        query: &str,
        has_images: bool,
        department_id: Option<u32>,
    ) -> MetResult<SearchHits> {
        let key = SearchKey::new(query, has_images, department_id);
        if let Some(hit) = self.caches.search.get(&key).await {
            debug!(query = %key.query, "search served from cache");
            return Ok(hit);
        }

        let url = build_search_url(&self.config, &key);
        let body: SearchResponse = self
            .backend
            .get_json(&url, self.config.search_timeout)
            .await?;

        let hits = SearchHits {
            object_ids: body.object_ids.unwrap_or_default(),
            total: body.total.unwrap_or(0),
        };
        debug!(query = %key.query, returned = hits.len(), total = hits.total, "search completed");

        self.caches.search.insert(key, hits.clone()).await;
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{short_ttl_config, test_config};
    use crate::error::MetError;
    use crate::http::testing::FakeBackend;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_search_returns_ids_and_total() {
        let backend = FakeBackend::new()
            .with_json("search", json!({ "objectIDs": [3, 1, 2], "total": 4821 }));
        let client = MetClient::with_backend(test_config(), backend);

        let hits = client.search_ids("flower", true, None).await.unwrap();
        // Remote ranking order is preserved as-is.
        assert_eq!(hits.object_ids, vec![3, 1, 2]);
        assert_eq!(hits.total, 4821);
    }

    #[tokio::test]
    async fn test_search_null_ids_and_missing_total() {
        let backend = FakeBackend::new().with_json("search", json!({ "objectIDs": null }));
        let client = MetClient::with_backend(test_config(), backend);

        let hits = client.search_ids("zzzzz", true, None).await.unwrap();
        assert!(hits.is_empty());
        assert_eq!(hits.total, 0);
    }

    #[tokio::test]
    async fn test_search_cache_hit_within_window() {
        let backend = FakeBackend::new()
            .with_json("search", json!({ "objectIDs": [1], "total": 1 }));
        let client = MetClient::with_backend(test_config(), backend);

        let first = client.search_ids("flower", true, None).await.unwrap();
        let second = client.search_ids(" flower ", true, None).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(client.backend.request_count(), 1);
    }

    #[tokio::test]
    async fn test_search_distinct_tuples_miss() {
        let backend = FakeBackend::new()
            .with_json("search", json!({ "objectIDs": [1], "total": 1 }));
        let client = MetClient::with_backend(test_config(), backend);

        client.search_ids("flower", true, None).await.unwrap();
        client.search_ids("flower", false, None).await.unwrap();
        client.search_ids("flower", true, Some(6)).await.unwrap();
        assert_eq!(client.backend.request_count(), 3);
    }

    #[tokio::test]
    async fn test_search_refetches_after_expiry() {
        let backend = FakeBackend::new()
            .with_json("search", json!({ "objectIDs": [1], "total": 1 }));
        let client =
            MetClient::with_backend(short_ttl_config(Duration::from_millis(50)), backend);

        client.search_ids("flower", true, None).await.unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;
        client.search_ids("flower", true, None).await.unwrap();
        assert_eq!(client.backend.request_count(), 2);
    }

    #[tokio::test]
    async fn test_search_failure_propagates_uncached() {
        let backend = FakeBackend::new().with_status("search", 500);
        let client = MetClient::with_backend(test_config(), backend);

        let err = client.search_ids("flower", true, None).await.unwrap_err();
        assert!(matches!(err, MetError::ApiRequestFailed { status: 500, .. }));

        let _ = client.search_ids("flower", true, None).await.unwrap_err();
        assert_eq!(client.backend.request_count(), 2);
    }
}
