//! Port for department persistence.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Department, DepartmentId, DepartmentUpdate, NewDepartment};

use super::define_port_error;

define_port_error! {
    /// Errors raised by department repository adapters.
    pub enum DepartmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "department repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "department repository query failed: {message}",
        /// Another department already uses the name.
        DuplicateName { name: String } =>
            "department name already exists: {name}",
    }
}

/// Port for storing departments.
///
/// Deleting a department removes its membership rows but never the members
/// themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Insert a department and return the stored row.
    async fn insert(
        &self,
        department: &NewDepartment,
    ) -> Result<Department, DepartmentRepositoryError>;

    /// List departments ordered by id.
    async fn list(&self, page: Page) -> Result<Vec<Department>, DepartmentRepositoryError>;

    /// Fetch one department; `None` when absent.
    async fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, DepartmentRepositoryError>;

    /// Overwrite the department's fields; `None` when absent.
    async fn update(
        &self,
        id: DepartmentId,
        update: &DepartmentUpdate,
    ) -> Result<Option<Department>, DepartmentRepositoryError>;

    /// Delete the department; `false` when absent.
    async fn delete(&self, id: DepartmentId) -> Result<bool, DepartmentRepositoryError>;
}
