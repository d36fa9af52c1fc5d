//! Driving port for department reads.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Department, DepartmentId, Error};

/// Inbound contract for reading departments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentsQuery: Send + Sync {
    /// List one page of departments ordered by id.
    async fn list(&self, page: Page) -> Result<Vec<Department>, Error>;

    /// Fetch a department by id; `not_found` when absent.
    async fn get(&self, id: DepartmentId) -> Result<Department, Error>;
}
