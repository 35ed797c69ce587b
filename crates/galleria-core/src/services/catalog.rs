//! Department catalog loader.

use tracing::warn;

use crate::domain::DepartmentCatalog;
use crate::ports::CollectionPort;

/// Load the selectable department catalog.
///
/// On any port failure this degrades to the sentinel-only fallback
/// catalog instead of surfacing an error: the department filter is an
/// optional convenience and must never block a search. The department
/// list itself changes rarely, so the adapter caches successful
/// fetches for a long window.
pub async fn load_catalog(port: &dyn CollectionPort) -> DepartmentCatalog {
    match port.fetch_departments().await {
        Ok(departments) => DepartmentCatalog::from_departments(&departments),
        Err(err) => {
            warn!(error = %err, "department catalog unavailable, using fallback");
            DepartmentCatalog::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ALL_DEPARTMENTS, Department};
    use crate::ports::{CollectionError, collection::MockCollectionPort};

    #[tokio::test]
    async fn test_load_catalog_success() {
        let mut port = MockCollectionPort::new();
        port.expect_fetch_departments().times(1).returning(|| {
            Ok(vec![Department {
                department_id: 6,
                display_name: "Asian Art".to_string(),
            }])
        });

        let catalog = load_catalog(&port).await;
        assert_eq!(catalog.options().len(), 2);
        assert_eq!(catalog.options()[0], ALL_DEPARTMENTS);
        assert_eq!(catalog.resolve("Asian Art (6)"), Some(Some(6)));
    }

    #[tokio::test]
    async fn test_load_catalog_degrades_on_failure() {
        let mut port = MockCollectionPort::new();
        port.expect_fetch_departments().times(1).returning(|| {
            Err(CollectionError::Network {
                message: "connection refused".to_string(),
            })
        });

        let catalog = load_catalog(&port).await;
        assert!(catalog.is_fallback());
        assert_eq!(catalog.resolve(ALL_DEPARTMENTS), Some(None));
    }

    #[tokio::test]
    async fn test_load_catalog_degrades_on_bad_status() {
        let mut port = MockCollectionPort::new();
        port.expect_fetch_departments().times(1).returning(|| {
            Err(CollectionError::RequestFailed {
                status: 503,
                url: "https://example.test/departments".to_string(),
            })
        });

        let catalog = load_catalog(&port).await;
        assert!(catalog.is_fallback());
    }
}
