//! Port trait implementation for `MetClient`.
//!
//! This module implements the core-owned `CollectionPort` trait for
//! `MetClient`, mapping internal errors to port errors at the
//! boundary.

use async_trait::async_trait;
use galleria_core::{Artwork, CollectionError, CollectionPort, CollectionResult, Department, SearchHits};

use crate::client::MetClient;
use crate::error::MetError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `MetError` to the core `CollectionError`.
fn map_error(err: MetError) -> CollectionError {
    match err {
        MetError::ApiRequestFailed { status, url } => {
            CollectionError::RequestFailed { status, url }
        }
        MetError::Timeout { url, .. } => CollectionError::Timeout { url },
        MetError::Network(e) => CollectionError::Network {
            message: e.to_string(),
        },
        MetError::JsonParse(e) => CollectionError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CollectionPort for MetClient<B> {
    async fn fetch_departments(&self) -> CollectionResult<Vec<Department>> {
        self.departments().await.map_err(map_error)
    }

    async fn search(
        &self,
        query: &str,
        has_images: bool,
        department_id: Option<u32>,
    ) -> CollectionResult<SearchHits> {
        self.search_ids(query, has_images, department_id)
            .await
            .map_err(map_error)
    }

    async fn fetch_object(&self, object_id: u64) -> CollectionResult<Option<Artwork>> {
        // Per-object failures are already absences inside the client.
        Ok(self.object(object_id).await)
    }
}
