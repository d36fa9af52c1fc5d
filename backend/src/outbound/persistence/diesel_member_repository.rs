//! PostgreSQL-backed `MemberRepository` implementation using Diesel ORM.
//!
//! Members and their department memberships are written in one transaction.
//! Memberships are never diffed: every write clears the member's rows in
//! `department_member_association` and inserts the resolved set again.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use pagination::Page;
use tracing::debug;

use crate::domain::ports::{MemberRepository, MemberRepositoryError};
use crate::domain::{
    Department, DepartmentId, Member, MemberFilter, MemberId, MemberUpdate, NewMember, PhotoUri,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{DepartmentRow, MemberChanges, MemberRow, MembershipRow};
use super::pool::{DbPool, PoolError};
use super::schema::{department_member_association as memberships, departments, members};

/// Diesel-backed implementation of the member repository port.
#[derive(Clone)]
pub struct DieselMemberRepository {
    pool: DbPool,
}

impl DieselMemberRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MemberRepositoryError {
    map_basic_pool_error(error, MemberRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> MemberRepositoryError {
    map_basic_diesel_error(
        error,
        MemberRepositoryError::query,
        MemberRepositoryError::connection,
    )
}

fn into_member(row: MemberRow, departments: Vec<Department>) -> Member {
    Member {
        id: MemberId::new(row.id),
        name: row.name,
        role: row.role,
        photo_uri: PhotoUri::new(row.photo_uri),
        active_member: row.active_member,
        departments,
    }
}

fn raw_ids(ids: &[DepartmentId]) -> Vec<i32> {
    ids.iter().map(|id| id.get()).collect()
}

/// Link `member_id` to every department in `requested` that exists.
///
/// Unknown ids are skipped. Returns the attached departments ordered by id.
async fn attach_departments(
    conn: &mut AsyncPgConnection,
    member_id: i32,
    requested: &[i32],
) -> QueryResult<Vec<Department>> {
    if requested.is_empty() {
        return Ok(Vec::new());
    }

    let found: Vec<DepartmentRow> = departments::table
        .filter(departments::id.eq_any(requested))
        .order(departments::id.asc())
        .select(DepartmentRow::as_select())
        .load(conn)
        .await?;

    if found.len() < requested.len() {
        debug!(
            member_id,
            requested = requested.len(),
            attached = found.len(),
            "skipping unknown department ids"
        );
    }
    if found.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<MembershipRow> = found
        .iter()
        .map(|department| MembershipRow {
            department_id: department.id,
            member_id,
        })
        .collect();
    diesel::insert_into(memberships::table)
        .values(&rows)
        .execute(conn)
        .await?;

    Ok(found.into_iter().map(Department::from).collect())
}

/// Load departments for each of `member_ids`, grouped by member.
async fn departments_by_member(
    conn: &mut AsyncPgConnection,
    member_ids: &[i32],
) -> QueryResult<HashMap<i32, Vec<Department>>> {
    let rows: Vec<(i32, DepartmentRow)> = memberships::table
        .inner_join(departments::table)
        .filter(memberships::member_id.eq_any(member_ids))
        .order((memberships::member_id.asc(), departments::id.asc()))
        .select((memberships::member_id, DepartmentRow::as_select()))
        .load(conn)
        .await?;

    let mut grouped: HashMap<i32, Vec<Department>> = HashMap::new();
    for (member_id, department) in rows {
        grouped
            .entry(member_id)
            .or_default()
            .push(department.into());
    }
    Ok(grouped)
}

async fn hydrate(conn: &mut AsyncPgConnection, rows: Vec<MemberRow>) -> QueryResult<Vec<Member>> {
    let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let mut grouped = departments_by_member(conn, &ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let departments = grouped.remove(&row.id).unwrap_or_default();
            into_member(row, departments)
        })
        .collect())
}

#[async_trait]
impl MemberRepository for DieselMemberRepository {
    async fn insert(&self, member: &NewMember) -> Result<Member, MemberRepositoryError> {
        let mut pooled = self.pool.get().await.map_err(map_pool_error)?;
        let conn: &mut AsyncPgConnection = &mut pooled;
        let changes = MemberChanges {
            name: member.draft.name(),
            role: member.draft.role(),
            photo_uri: member.photo_uri.as_str(),
            active_member: member.draft.active_member(),
        };
        let requested = raw_ids(member.draft.department_ids());

        conn.transaction(|conn| {
            async move {
                let row: MemberRow = diesel::insert_into(members::table)
                    .values(&changes)
                    .returning(MemberRow::as_returning())
                    .get_result(conn)
                    .await?;
                let attached = attach_departments(conn, row.id, &requested).await?;
                Ok(into_member(row, attached))
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn list(
        &self,
        page: Page,
        filter: &MemberFilter,
    ) -> Result<Vec<Member>, MemberRepositoryError> {
        let mut pooled = self.pool.get().await.map_err(map_pool_error)?;
        let conn: &mut AsyncPgConnection = &mut pooled;

        let mut query = members::table
            .order(members::id.asc())
            .offset(page.offset())
            .limit(page.limit())
            .select(MemberRow::as_select())
            .into_boxed();
        if let Some(role) = filter.role() {
            query = query.filter(members::role.eq(role));
        }

        let rows: Vec<MemberRow> = query.load(conn).await.map_err(map_diesel_error)?;
        hydrate(conn, rows).await.map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, MemberRepositoryError> {
        let mut pooled = self.pool.get().await.map_err(map_pool_error)?;
        let conn: &mut AsyncPgConnection = &mut pooled;

        let row: Option<MemberRow> = members::table
            .find(id.get())
            .select(MemberRow::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let mut hydrated = hydrate(conn, vec![row]).await.map_err(map_diesel_error)?;
        Ok(hydrated.pop())
    }

    async fn update(
        &self,
        id: MemberId,
        update: &MemberUpdate,
    ) -> Result<Option<Member>, MemberRepositoryError> {
        let mut pooled = self.pool.get().await.map_err(map_pool_error)?;
        let conn: &mut AsyncPgConnection = &mut pooled;
        let changes = MemberChanges {
            name: &update.name,
            role: &update.role,
            photo_uri: update.photo_uri.as_str(),
            active_member: update.active_member,
        };
        let requested = raw_ids(&update.department_ids);

        conn.transaction(|conn| {
            async move {
                let updated: Option<MemberRow> = diesel::update(members::table.find(id.get()))
                    .set(&changes)
                    .returning(MemberRow::as_returning())
                    .get_result(conn)
                    .await
                    .optional()?;
                let Some(row) = updated else {
                    return Ok(None);
                };

                diesel::delete(memberships::table.filter(memberships::member_id.eq(row.id)))
                    .execute(conn)
                    .await?;
                let attached = attach_departments(conn, row.id, &requested).await?;
                Ok(Some(into_member(row, attached)))
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn delete(&self, id: MemberId) -> Result<bool, MemberRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(members::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
