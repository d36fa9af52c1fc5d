//! Department HTTP handlers.
//!
//! ```text
//! POST   /api/departments
//! GET    /api/departments?skip=&limit=
//! GET    /api/departments/{id}
//! PUT    /api/departments/{id}
//! DELETE /api/departments/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Department, DepartmentId, DepartmentUpdate, NewDepartment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MessageResponse, PageParams};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_page};

const NAME: FieldName = FieldName::new("name");

/// Request payload for creating or renaming a department.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DepartmentRequest {
    #[schema(example = "Events")]
    pub name: Option<String>,
}

impl DepartmentRequest {
    fn name(&self) -> Result<&str, crate::domain::Error> {
        self.name.as_deref().ok_or_else(|| missing_field_error(NAME))
    }
}

/// Department as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentResponse {
    pub id: i32,
    #[schema(example = "Events")]
    pub name: String,
}

impl From<Department> for DepartmentResponse {
    fn from(value: Department) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
        }
    }
}

/// Create a department.
#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = DepartmentRequest,
    responses(
        (status = 200, description = "Created department", body = DepartmentResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Name already taken", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "createDepartment"
)]
#[post("/departments")]
pub async fn create_department(
    state: web::Data<HttpState>,
    payload: web::Json<DepartmentRequest>,
) -> ApiResult<web::Json<DepartmentResponse>> {
    let department = NewDepartment::try_new(payload.name()?)?;
    let created = state.departments.create(department).await?;
    Ok(web::Json(created.into()))
}

/// List departments ordered by id.
#[utoipa::path(
    get,
    path = "/api/departments",
    params(PageParams),
    responses(
        (status = 200, description = "One page of departments", body = [DepartmentResponse]),
        (status = 400, description = "Invalid pagination", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "listDepartments"
)]
#[get("/departments")]
pub async fn list_departments(
    state: web::Data<HttpState>,
    query: web::Query<PageParams>,
) -> ApiResult<web::Json<Vec<DepartmentResponse>>> {
    let page = parse_page(query.into_inner().into())?;
    let departments = state.departments_query.list(page).await?;
    Ok(web::Json(
        departments.into_iter().map(DepartmentResponse::from).collect(),
    ))
}

/// Fetch one department.
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(("id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department", body = DepartmentResponse),
        (status = 404, description = "Unknown department", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "getDepartment"
)]
#[get("/departments/{id}")]
pub async fn get_department(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DepartmentResponse>> {
    let department = state
        .departments_query
        .get(DepartmentId::new(path.into_inner()))
        .await?;
    Ok(web::Json(department.into()))
}

/// Rename a department.
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(("id" = i32, Path, description = "Department id")),
    request_body = DepartmentRequest,
    responses(
        (status = 200, description = "Updated department", body = DepartmentResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown department", body = ErrorSchema),
        (status = 409, description = "Name already taken", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "updateDepartment"
)]
#[put("/departments/{id}")]
pub async fn update_department(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<DepartmentRequest>,
) -> ApiResult<web::Json<DepartmentResponse>> {
    let update = DepartmentUpdate::try_new(payload.name()?)?;
    let updated = state
        .departments
        .update(DepartmentId::new(path.into_inner()), update)
        .await?;
    Ok(web::Json(updated.into()))
}

/// Delete a department; its members are kept.
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(("id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department deleted", body = MessageResponse),
        (status = 404, description = "Unknown department", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "deleteDepartment"
)]
#[delete("/departments/{id}")]
pub async fn delete_department(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .departments
        .delete(DepartmentId::new(path.into_inner()))
        .await?;
    Ok(web::Json(MessageResponse::deleted("Department")))
}

#[cfg(test)]
#[path = "departments_tests.rs"]
mod tests;
