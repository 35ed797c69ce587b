//! Object detail endpoint.

use galleria_core::Artwork;
use tracing::debug;

use super::MetClient;
use crate::http::HttpBackend;
use crate::models::ObjectRecord;
use crate::url::build_object_url;

impl<B: HttpBackend> MetClient<B> {
    /// Fetch one object record.
    ///
    /// Exactly-200-with-a-parseable-body yields the record; every
    /// other outcome (non-200 status, timeout, network failure,
    /// malformed body) is an absence, never an error, so a batch
    /// render can always continue past a bad id. Both outcomes are
    /// cached for the long object TTL.
    pub(crate) async fn object(&self, object_id: u64) -> Option<Artwork> {
        if let Some(hit) = self.caches.objects.get(&object_id).await {
            debug!(object_id, "object served from cache");
            return hit;
        }

        let url = build_object_url(&self.config, object_id);
        let outcome = match self
            .backend
            .get_json::<ObjectRecord>(&url, self.config.detail_timeout)
            .await
        {
            Ok(record) => Some(record.into_artwork()),
            Err(err) => {
                debug!(object_id, error = %err, "object unavailable, treating as absent");
                None
            }
        };

        self.caches.objects.insert(object_id, outcome.clone()).await;
        outcome
    }
}
