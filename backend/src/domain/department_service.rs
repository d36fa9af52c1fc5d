//! Department domain service.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;
use serde_json::json;

use crate::domain::ports::{
    DepartmentRepository, DepartmentRepositoryError, DepartmentsCommand, DepartmentsQuery,
};
use crate::domain::{Department, DepartmentId, DepartmentUpdate, Error, NewDepartment};

/// Department service implementing the department driving ports.
#[derive(Clone)]
pub struct DepartmentService<R> {
    repo: Arc<R>,
}

impl<R> DepartmentService<R> {
    /// Create a service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(error: DepartmentRepositoryError) -> Error {
    match error {
        DepartmentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("department repository unavailable: {message}"))
        }
        DepartmentRepositoryError::Query { message } => {
            Error::internal(format!("department repository error: {message}"))
        }
        DepartmentRepositoryError::DuplicateName { name } => {
            Error::conflict(format!("department name already exists: {name}")).with_details(
                json!({
                    "field": "name",
                    "code": "duplicate_name",
                }),
            )
        }
    }
}

fn not_found(id: DepartmentId) -> Error {
    Error::not_found(format!("department {id} not found"))
}

#[async_trait]
impl<R: DepartmentRepository> DepartmentsCommand for DepartmentService<R> {
    async fn create(&self, department: NewDepartment) -> Result<Department, Error> {
        self.repo
            .insert(&department)
            .await
            .map_err(map_repository_error)
    }

    async fn update(&self, id: DepartmentId, update: DepartmentUpdate) -> Result<Department, Error> {
        self.repo
            .update(id, &update)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: DepartmentId) -> Result<(), Error> {
        let deleted = self.repo.delete(id).await.map_err(map_repository_error)?;
        if deleted { Ok(()) } else { Err(not_found(id)) }
    }
}

#[async_trait]
impl<R: DepartmentRepository> DepartmentsQuery for DepartmentService<R> {
    async fn list(&self, page: Page) -> Result<Vec<Department>, Error> {
        self.repo.list(page).await.map_err(map_repository_error)
    }

    async fn get(&self, id: DepartmentId) -> Result<Department, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}
