//! Gallery assembly: the search -> truncate -> fetch -> lay out pipeline.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::Artwork;
use crate::ports::{CollectionError, CollectionPort};

/// Lower bound for the display count.
pub const MIN_DISPLAY_COUNT: usize = 1;

/// Upper bound for the display count.
pub const MAX_DISPLAY_COUNT: usize = 60;

/// Default number of results to display.
pub const DEFAULT_DISPLAY_COUNT: usize = 18;

/// Default number of display columns.
pub const DEFAULT_COLUMNS: usize = 3;

/// A validated gallery request.
#[derive(Debug, Clone)]
pub struct GalleryRequest {
    /// Search keyword (trimmed before use; must not be blank)
    pub query: String,
    /// Only match objects that have images
    pub has_images: bool,
    /// Optional department filter
    pub department_id: Option<u32>,
    /// Maximum cards to display, clamped to 1..=60
    pub max_display: usize,
    /// Number of display columns
    pub columns: usize,
}

impl GalleryRequest {
    /// Request with the observed UI defaults: images required, no
    /// department filter, 18 results across 3 columns.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            has_images: true,
            department_id: None,
            max_display: DEFAULT_DISPLAY_COUNT,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// One rendered card: a fetched artwork and its column slot.
#[derive(Debug, Clone)]
pub struct GalleryCard {
    /// The fetched record
    pub artwork: Artwork,
    /// Column index assigned round-robin from the id's position
    pub column: usize,
}

/// The assembled gallery for one search interaction.
#[derive(Debug, Clone)]
pub struct Gallery {
    /// Authoritative total reported by the remote service
    pub total: u64,
    /// Number of detail fetches attempted, `min(max_display, ids.len())`
    pub attempted: usize,
    /// Successfully fetched cards, in id order with absences skipped
    pub cards: Vec<GalleryCard>,
}

/// Errors from gallery assembly.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The query was empty or whitespace-only; no network call was made.
    #[error("search keyword must not be empty")]
    EmptyQuery,

    /// The search request itself failed; the interaction stops here.
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Orchestrates one search interaction against the collection port.
///
/// Control flow is strictly linear: validate the query, search, then
/// fetch each of the first N ids sequentially (one request in flight
/// at a time). Objects the remote cannot serve are skipped without
/// reordering the survivors.
pub struct GalleryService {
    port: Arc<dyn CollectionPort>,
}

impl GalleryService {
    /// Create a service over a collection port.
    #[must_use]
    pub fn new(port: Arc<dyn CollectionPort>) -> Self {
        Self { port }
    }

    /// Run one search interaction and assemble the gallery.
    pub async fn run(&self, request: &GalleryRequest) -> Result<Gallery, GalleryError> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(GalleryError::EmptyQuery);
        }

        let hits = self
            .port
            .search(query, request.has_images, request.department_id)
            .await?;

        let max_display = request
            .max_display
            .clamp(MIN_DISPLAY_COUNT, MAX_DISPLAY_COUNT);
        let columns = request.columns.max(1);
        let attempted = hits.len().min(max_display);

        let mut cards = Vec::with_capacity(attempted);
        for (index, &object_id) in hits.object_ids.iter().take(max_display).enumerate() {
            // Column slots follow the id's position, so a skipped id
            // leaves its slot to the next row rather than shifting
            // every later card.
            match self.port.fetch_object(object_id).await? {
                Some(artwork) => cards.push(GalleryCard {
                    artwork,
                    column: index % columns,
                }),
                None => debug!(object_id, "object unavailable, skipping slot"),
            }
        }

        Ok(Gallery {
            total: hits.total,
            attempted,
            cards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchHits;
    use crate::ports::collection::MockCollectionPort;

    fn artwork(object_id: u64) -> Artwork {
        Artwork {
            object_id,
            title: Some(format!("Work {object_id}")),
            ..Default::default()
        }
    }

    fn service(port: MockCollectionPort) -> GalleryService {
        GalleryService::new(Arc::new(port))
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_network_call() {
        let mut port = MockCollectionPort::new();
        port.expect_search().times(0);
        port.expect_fetch_object().times(0);

        let svc = service(port);
        for query in ["", "   ", "\t\n"] {
            let err = svc
                .run(&GalleryRequest::new(query))
                .await
                .expect_err("blank query must be rejected");
            assert!(matches!(err, GalleryError::EmptyQuery));
        }
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_search() {
        let mut port = MockCollectionPort::new();
        port.expect_search()
            .withf(|query, has_images, department_id| {
                query == "flower" && *has_images && department_id.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(SearchHits::default()));

        let svc = service(port);
        let gallery = svc.run(&GalleryRequest::new("  flower  ")).await.unwrap();
        assert_eq!(gallery.total, 0);
        assert!(gallery.cards.is_empty());
    }

    #[tokio::test]
    async fn test_truncates_ids_and_preserves_order() {
        let mut port = MockCollectionPort::new();
        port.expect_search().times(1).returning(|_, _, _| {
            Ok(SearchHits {
                object_ids: (1..=10).collect(),
                total: 400,
            })
        });
        // Only the first 4 ids may be fetched.
        port.expect_fetch_object()
            .withf(|id| (1..=4).contains(id))
            .times(4)
            .returning(|id| Ok(Some(artwork(id))));

        let mut request = GalleryRequest::new("flower");
        request.max_display = 4;
        let gallery = service(port).run(&request).await.unwrap();

        assert_eq!(gallery.total, 400);
        assert_eq!(gallery.attempted, 4);
        let rendered: Vec<u64> = gallery.cards.iter().map(|c| c.artwork.object_id).collect();
        assert_eq!(rendered, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_absent_objects_shrink_but_do_not_reorder() {
        let mut port = MockCollectionPort::new();
        port.expect_search().times(1).returning(|_, _, _| {
            Ok(SearchHits {
                object_ids: vec![11, 12, 13, 14, 15],
                total: 5,
            })
        });
        // 12 and 14 are missing remotely; the loop continues past them.
        port.expect_fetch_object().times(5).returning(|id| {
            if id == 12 || id == 14 {
                Ok(None)
            } else {
                Ok(Some(artwork(id)))
            }
        });

        let gallery = service(port).run(&GalleryRequest::new("vase")).await.unwrap();

        assert_eq!(gallery.attempted, 5);
        let rendered: Vec<u64> = gallery.cards.iter().map(|c| c.artwork.object_id).collect();
        assert_eq!(rendered, vec![11, 13, 15]);
    }

    #[tokio::test]
    async fn test_columns_follow_id_position_not_render_position() {
        let mut port = MockCollectionPort::new();
        port.expect_search().times(1).returning(|_, _, _| {
            Ok(SearchHits {
                object_ids: vec![1, 2, 3, 4],
                total: 4,
            })
        });
        // Id 2 (slot 1) is absent, so the next card keeps slot 2.
        port.expect_fetch_object()
            .times(4)
            .returning(|id| Ok(if id == 2 { None } else { Some(artwork(id)) }));

        let gallery = service(port).run(&GalleryRequest::new("bronze")).await.unwrap();

        let slots: Vec<(u64, usize)> = gallery
            .cards
            .iter()
            .map(|c| (c.artwork.object_id, c.column))
            .collect();
        assert_eq!(slots, vec![(1, 0), (3, 2), (4, 0)]);
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let mut port = MockCollectionPort::new();
        port.expect_search().times(1).returning(|_, _, _| {
            Err(CollectionError::RequestFailed {
                status: 500,
                url: "https://example.test/search".to_string(),
            })
        });
        port.expect_fetch_object().times(0);

        let err = service(port)
            .run(&GalleryRequest::new("flower"))
            .await
            .expect_err("search failure must propagate");
        assert!(matches!(err, GalleryError::Collection(_)));
    }

    #[tokio::test]
    async fn test_display_count_is_clamped() {
        let mut port = MockCollectionPort::new();
        port.expect_search().times(1).returning(|_, _, _| {
            Ok(SearchHits {
                object_ids: (1..=100).collect(),
                total: 100,
            })
        });
        port.expect_fetch_object()
            .times(MAX_DISPLAY_COUNT)
            .returning(|id| Ok(Some(artwork(id))));

        let mut request = GalleryRequest::new("portrait");
        request.max_display = 500;
        let gallery = service(port).run(&request).await.unwrap();
        assert_eq!(gallery.attempted, MAX_DISPLAY_COUNT);
        assert_eq!(gallery.cards.len(), MAX_DISPLAY_COUNT);
    }

    #[tokio::test]
    async fn test_department_filter_is_forwarded() {
        let mut port = MockCollectionPort::new();
        port.expect_search()
            .withf(|query, has_images, department_id| {
                query == "china" && !*has_images && *department_id == Some(6)
            })
            .times(1)
            .returning(|_, _, _| Ok(SearchHits::default()));

        let mut request = GalleryRequest::new("china");
        request.has_images = false;
        request.department_id = Some(6);
        let gallery = service(port).run(&request).await.unwrap();
        assert_eq!(gallery.attempted, 0);
    }
}
