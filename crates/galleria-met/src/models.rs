//! Internal API response types for the Met collection API.
//!
//! These types are internal to `galleria-met` and are not exposed to
//! consumers. External consumers use the domain types from
//! `galleria-core`.

use std::time::Duration;

use galleria_core::{Artwork, Department};
use serde::Deserialize;
use url::Url;

use crate::config::DEFAULT_BASE_URL;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Met client.
#[derive(Debug, Clone)]
pub struct MetConfig {
    /// Parsed base URL for the collection API
    pub base_url: Url,
    /// User agent string
    pub user_agent: String,
    /// Timeout for search requests
    pub search_timeout: Duration,
    /// Timeout for department and object requests
    pub detail_timeout: Duration,
    /// Department catalog TTL
    pub catalog_ttl: Duration,
    /// Search result TTL
    pub search_ttl: Duration,
    /// Object record TTL
    pub object_ttl: Duration,
}

impl Default for MetConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default Met API URL is valid"),
            user_agent: concat!("galleria-met/", env!("CARGO_PKG_VERSION")).to_string(),
            search_timeout: Duration::from_secs(25),
            detail_timeout: Duration::from_secs(20),
            catalog_ttl: Duration::from_secs(3600),
            search_ttl: Duration::from_secs(60),
            object_ttl: Duration::from_secs(3600),
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of `GET /departments`.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsResponse {
    #[serde(default)]
    pub departments: Vec<DepartmentRecord>,
}

/// One entry of the department list.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentRecord {
    #[serde(rename = "departmentId")]
    pub department_id: u32,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl From<DepartmentRecord> for Department {
    fn from(record: DepartmentRecord) -> Self {
        Self {
            department_id: record.department_id,
            display_name: record.display_name,
        }
    }
}

/// Body of `GET /search`.
///
/// The service sends `"objectIDs": null` (not an empty array) when
/// nothing matches, and may omit `total`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<u64>>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Body of `GET /objects/{id}`.
///
/// Descriptive fields arrive as empty strings rather than null when
/// the museum has no data; [`ObjectRecord::into_artwork`] normalizes
/// both shapes to `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    #[serde(rename = "objectID")]
    pub object_id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_display_name: Option<String>,
    #[serde(default)]
    pub object_date: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default)]
    pub primary_image_small: Option<String>,
    #[serde(rename = "objectURL", default)]
    pub object_url: Option<String>,
}

/// Drop empty strings so the domain only sees one absence value.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl ObjectRecord {
    /// Convert the wire record into the domain artwork.
    pub fn into_artwork(self) -> Artwork {
        Artwork {
            object_id: self.object_id,
            title: non_empty(self.title),
            artist_display_name: non_empty(self.artist_display_name),
            object_date: non_empty(self.object_date),
            medium: non_empty(self.medium),
            primary_image: non_empty(self.primary_image),
            primary_image_small: non_empty(self.primary_image_small),
            object_url: non_empty(self.object_url),
        }
    }
}
