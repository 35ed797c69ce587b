//! Collection client port trait.

use async_trait::async_trait;

use super::error::CollectionResult;
use crate::domain::{Artwork, Department, SearchHits};

/// Port trait for the remote museum collection API.
///
/// This trait defines the interface the core uses to reach the
/// collection; the implementation (and its caching policy) lives in
/// `galleria-met`.
///
/// # Design
///
/// - `fetch_departments` and `search` report failures; the caller
///   decides the recovery policy (the catalog loader degrades, the
///   gallery service propagates).
/// - `fetch_object` never fails for per-object reasons: a missing,
///   unreachable or unparseable record is `Ok(None)` so one bad id
///   cannot interrupt a batch render.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionPort: Send + Sync {
    /// Fetch the department list in remote catalog order.
    async fn fetch_departments(&self) -> CollectionResult<Vec<Department>>;

    /// Search for object ids matching a keyword.
    ///
    /// `query` must be non-empty; callers validate before invoking.
    /// `department_id` is sent only when `Some`.
    async fn search(
        &self,
        query: &str,
        has_images: bool,
        department_id: Option<u32>,
    ) -> CollectionResult<SearchHits>;

    /// Fetch the full record for one object id.
    ///
    /// `Ok(None)` signals absence (any non-200 outcome); it is not an
    /// error and must be treated as "skip this slot".
    async fn fetch_object(&self, object_id: u64) -> CollectionResult<Option<Artwork>>;
}
