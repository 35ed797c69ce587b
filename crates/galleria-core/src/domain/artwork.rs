//! A single museum collection record.

use serde::{Deserialize, Serialize};

/// Fallback title when a record carries none.
pub const UNTITLED: &str = "Untitled";

/// Fallback artist when a record carries none.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// A single collection object (artwork or artifact) as exposed by the
/// remote API.
///
/// Every descriptive field may be absent; adapters normalize empty
/// strings to `None` so consumers only deal with one absence value.
/// Rendering must never fail on a missing field - use the `display_*`
/// helpers for the documented fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Stable remote identifier
    pub object_id: u64,
    /// Title of the work
    pub title: Option<String>,
    /// Artist display name
    pub artist_display_name: Option<String>,
    /// Free-form date string (e.g., "ca. 1660-1665")
    pub object_date: Option<String>,
    /// Materials/technique
    pub medium: Option<String>,
    /// Full-resolution image URL
    pub primary_image: Option<String>,
    /// Smaller image URL, preferred for gallery display
    pub primary_image_small: Option<String>,
    /// Link to the source page on the museum website
    pub object_url: Option<String>,
}

impl Artwork {
    /// Title for display, falling back to "Untitled".
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    /// Artist for display, falling back to "Unknown".
    #[must_use]
    pub fn display_artist(&self) -> &str {
        self.artist_display_name.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }

    /// Date for display, falling back to the empty string.
    #[must_use]
    pub fn display_date(&self) -> &str {
        self.object_date.as_deref().unwrap_or("")
    }

    /// Best available image URL: the small rendition when present,
    /// otherwise the full-resolution one.
    #[must_use]
    pub fn best_image(&self) -> Option<&str> {
        self.primary_image_small
            .as_deref()
            .or(self.primary_image.as_deref())
    }
}
