//! Driving port for department mutations.

use async_trait::async_trait;

use crate::domain::{Department, DepartmentId, DepartmentUpdate, Error, NewDepartment};

/// Inbound contract for creating, renaming and deleting departments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentsCommand: Send + Sync {
    /// Create a department.
    ///
    /// # Errors
    /// Returns a `conflict` error when the name is already taken.
    async fn create(&self, department: NewDepartment) -> Result<Department, Error>;

    /// Overwrite a department.
    ///
    /// # Errors
    /// Returns `not_found` for an unknown id and `conflict` for a taken name.
    async fn update(&self, id: DepartmentId, update: DepartmentUpdate)
    -> Result<Department, Error>;

    /// Delete a department, leaving its members in place.
    ///
    /// # Errors
    /// Returns `not_found` for an unknown id.
    async fn delete(&self, id: DepartmentId) -> Result<(), Error>;
}
