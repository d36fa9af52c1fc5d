//! PostgreSQL-backed `DepartmentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::Page;

use crate::domain::ports::{DepartmentRepository, DepartmentRepositoryError};
use crate::domain::{Department, DepartmentId, DepartmentUpdate, NewDepartment};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{DepartmentChanges, DepartmentRow};
use super::pool::{DbPool, PoolError};
use super::schema::departments;

/// Diesel-backed implementation of the department repository port.
#[derive(Clone)]
pub struct DieselDepartmentRepository {
    pool: DbPool,
}

impl DieselDepartmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DepartmentRepositoryError {
    map_basic_pool_error(error, DepartmentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> DepartmentRepositoryError {
    map_basic_diesel_error(
        error,
        DepartmentRepositoryError::query,
        DepartmentRepositoryError::connection,
    )
}

/// Map a write failure, reporting a taken `name` as a duplicate.
fn map_write_error(error: diesel::result::Error, name: &str) -> DepartmentRepositoryError {
    if is_unique_violation(&error) {
        return DepartmentRepositoryError::duplicate_name(name);
    }
    map_diesel_error(error)
}

#[async_trait]
impl DepartmentRepository for DieselDepartmentRepository {
    async fn insert(
        &self,
        department: &NewDepartment,
    ) -> Result<Department, DepartmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(departments::table)
            .values(&DepartmentChanges {
                name: department.name(),
            })
            .returning(DepartmentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_write_error(err, department.name()))?;
        Ok(row.into())
    }

    async fn list(&self, page: Page) -> Result<Vec<Department>, DepartmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<DepartmentRow> = departments::table
            .order(departments::id.asc())
            .offset(page.offset())
            .limit(page.limit())
            .select(DepartmentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, DepartmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<DepartmentRow> = departments::table
            .find(id.get())
            .select(DepartmentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Department::from))
    }

    async fn update(
        &self,
        id: DepartmentId,
        update: &DepartmentUpdate,
    ) -> Result<Option<Department>, DepartmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<DepartmentRow> = diesel::update(departments::table.find(id.get()))
            .set(&DepartmentChanges {
                name: update.name(),
            })
            .returning(DepartmentRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_write_error(err, update.name()))?;
        Ok(row.map(Department::from))
    }

    async fn delete(&self, id: DepartmentId) -> Result<bool, DepartmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(departments::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(String::from("constraint")))
    }

    #[rstest]
    fn unique_violation_reports_duplicate_name() {
        let err = map_write_error(database_error(DatabaseErrorKind::UniqueViolation), "Events");
        assert_eq!(err, DepartmentRepositoryError::duplicate_name("Events"));
    }

    #[rstest]
    fn other_write_failures_are_query_errors() {
        let err = map_write_error(database_error(DatabaseErrorKind::CheckViolation), "Events");
        assert!(matches!(err, DepartmentRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_failures_are_connection_errors() {
        let err = map_pool_error(PoolError::build("bad url"));
        assert_eq!(err, DepartmentRepositoryError::connection("bad url"));
    }
}
