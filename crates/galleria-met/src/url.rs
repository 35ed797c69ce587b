//! URL construction helpers for the collection API.
//!
//! Pure functions for building the three endpoint URLs, ensuring
//! consistent construction (and escaping) across all API calls.

use url::Url;

use crate::cache::SearchKey;
use crate::models::MetConfig;

/// Append a path onto the configured base, tolerating a trailing slash.
fn join_path(config: &MetConfig, suffix: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{suffix}"));
    url
}

/// Build the department catalog URL.
pub fn build_departments_url(config: &MetConfig) -> Url {
    join_path(config, "departments")
}

/// Build a search URL; `departmentId` is emitted only when present.
pub fn build_search_url(config: &MetConfig, key: &SearchKey) -> Url {
    let mut url = join_path(config, "search");
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("q", &key.query);
        pairs.append_pair("hasImages", if key.has_images { "true" } else { "false" });
        if let Some(department_id) = key.department_id {
            pairs.append_pair("departmentId", &department_id.to_string());
        }
    }
    url
}

/// Build the object detail URL for one id.
pub fn build_object_url(config: &MetConfig, object_id: u64) -> Url {
    join_path(config, &format!("objects/{object_id}"))
}
