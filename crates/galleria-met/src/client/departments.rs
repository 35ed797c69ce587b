//! Department catalog endpoint.

use galleria_core::Department;
use tracing::debug;

use super::MetClient;
use crate::error::MetResult;
use crate::http::HttpBackend;
use crate::models::DepartmentsResponse;
use crate::url::build_departments_url;

impl<B: HttpBackend> MetClient<B> {
    /// Fetch the department list, serving the long-lived cache when
    /// fresh. Failures are not cached; the next call retries.
    pub(crate) async fn departments(&self) -> MetResult<Vec<Department>> {
        if let Some(hit) = self.caches.departments.get(&()).await {
            debug!("department catalog served from cache");
            return Ok(hit);
        }

        let url = build_departments_url(&self.config);
        let body: DepartmentsResponse = self
            .backend
            .get_json(&url, self.config.detail_timeout)
            .await?;

        let departments: Vec<Department> =
            body.departments.into_iter().map(Department::from).collect();
        debug!(count = departments.len(), "fetched department catalog");

        self.caches
            .departments
            .insert((), departments.clone())
            .await;
        Ok(departments)
    }
}
