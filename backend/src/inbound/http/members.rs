//! Member HTTP handlers.
//!
//! ```text
//! POST   /api/members              multipart: name, role, department_ids*, active_member?, photo?
//! GET    /api/members?skip=&limit=&role=
//! GET    /api/members/{id}
//! PUT    /api/members/{id}         multipart, same fields as create
//! DELETE /api/members/{id}
//! ```
//!
//! `department_ids` may repeat; an absent field means no departments. Ids that
//! match no department are skipped when the member is stored.

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web};
use pagination::PageQuery;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{CreateMemberRequest, UpdateMemberRequest};
use crate::domain::{DepartmentId, Error, Member, MemberDraft, MemberFilter, MemberId, PhotoUpload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::departments::DepartmentResponse;
use crate::inbound::http::multipart::{FormData, FormSchema, read_form};
use crate::inbound::http::schemas::{ErrorSchema, MessageResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_bool, parse_i32_list, parse_page};

const NAME: FieldName = FieldName::new("name");
const ROLE: FieldName = FieldName::new("role");
const DEPARTMENT_IDS: FieldName = FieldName::new("department_ids");
const ACTIVE_MEMBER: FieldName = FieldName::new("active_member");
const PHOTO: FieldName = FieldName::new("photo");

const MEMBER_FORM: FormSchema = FormSchema {
    text: &[NAME, ROLE, DEPARTMENT_IDS, ACTIVE_MEMBER],
    file: PHOTO,
};

/// Multipart fields accepted by member writes.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MemberForm {
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(example = "Treasurer")]
    role: String,
    /// Repeat the field once per department.
    department_ids: Option<Vec<i32>>,
    /// Defaults to `true`.
    active_member: Option<bool>,
    /// Portrait image; the placeholder is used on create when absent.
    #[schema(value_type = Option<String>, format = Binary)]
    photo: Option<Vec<u8>>,
}

/// Member as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: i32,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "Treasurer")]
    pub role: String,
    pub photo_uri: String,
    pub active_member: bool,
    pub departments: Vec<DepartmentResponse>,
}

impl From<Member> for MemberResponse {
    fn from(value: Member) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            role: value.role,
            photo_uri: value.photo_uri.as_str().to_owned(),
            active_member: value.active_member,
            departments: value
                .departments
                .into_iter()
                .map(DepartmentResponse::from)
                .collect(),
        }
    }
}

/// Query parameters for listing members.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberListParams {
    /// Rows to skip; defaults to 0.
    pub skip: Option<i64>,
    /// Rows to return; defaults to 10 and is clamped to 1..=100.
    pub limit: Option<i64>,
    /// Only return members holding exactly this role.
    pub role: Option<String>,
}

fn parse_member_form(mut form: FormData) -> Result<(MemberDraft, Option<PhotoUpload>), Error> {
    let active_member = form
        .optional(ACTIVE_MEMBER)
        .map(|raw| parse_bool(raw, ACTIVE_MEMBER))
        .transpose()?
        .unwrap_or(true);
    let department_ids = parse_i32_list(form.all(DEPARTMENT_IDS), DEPARTMENT_IDS)?;
    let draft = MemberDraft::try_new(
        form.required(NAME)?,
        form.required(ROLE)?,
        active_member,
        department_ids.into_iter().map(DepartmentId::new),
    )?;
    Ok((draft, form.take_photo()))
}

/// Create a member, uploading the photo first when one is sent.
#[utoipa::path(
    post,
    path = "/api/members",
    request_body(content = MemberForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created member", body = MemberResponse),
        (status = 400, description = "Invalid form", body = ErrorSchema),
        (status = 502, description = "Photo upload failed", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "createMember"
)]
#[post("/members")]
pub async fn create_member(
    state: web::Data<HttpState>,
    payload: Multipart,
) -> ApiResult<web::Json<MemberResponse>> {
    let (draft, photo) = parse_member_form(read_form(payload, MEMBER_FORM).await?)?;
    let member = state
        .members
        .create(CreateMemberRequest { draft, photo })
        .await?;
    Ok(web::Json(member.into()))
}

/// List members ordered by id, optionally filtered by role.
#[utoipa::path(
    get,
    path = "/api/members",
    params(MemberListParams),
    responses(
        (status = 200, description = "One page of members", body = [MemberResponse]),
        (status = 400, description = "Invalid pagination", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "listMembers"
)]
#[get("/members")]
pub async fn list_members(
    state: web::Data<HttpState>,
    query: web::Query<MemberListParams>,
) -> ApiResult<web::Json<Vec<MemberResponse>>> {
    let MemberListParams { skip, limit, role } = query.into_inner();
    let page = parse_page(PageQuery { skip, limit })?;
    let members = state
        .members_query
        .list(page, MemberFilter::with_role(role.as_deref()))
        .await?;
    Ok(web::Json(
        members.into_iter().map(MemberResponse::from).collect(),
    ))
}

/// Fetch one member with their departments.
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member", body = MemberResponse),
        (status = 404, description = "Unknown member", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "getMember"
)]
#[get("/members/{id}")]
pub async fn get_member(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<MemberResponse>> {
    let member = state
        .members_query
        .get(MemberId::new(path.into_inner()))
        .await?;
    Ok(web::Json(member.into()))
}

/// Overwrite a member; a new photo replaces and releases the old one.
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    request_body(content = MemberForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated member", body = MemberResponse),
        (status = 400, description = "Invalid form", body = ErrorSchema),
        (status = 404, description = "Unknown member", body = ErrorSchema),
        (status = 502, description = "Photo exchange failed", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "updateMember"
)]
#[put("/members/{id}")]
pub async fn update_member(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: Multipart,
) -> ApiResult<web::Json<MemberResponse>> {
    let (draft, photo) = parse_member_form(read_form(payload, MEMBER_FORM).await?)?;
    let member = state
        .members
        .update(UpdateMemberRequest {
            id: MemberId::new(path.into_inner()),
            draft,
            photo,
        })
        .await?;
    Ok(web::Json(member.into()))
}

/// Release the member's photo, then delete the member.
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member deleted", body = MessageResponse),
        (status = 404, description = "Unknown member", body = ErrorSchema),
        (status = 502, description = "Photo release failed; member kept", body = ErrorSchema)
    ),
    tags = ["members"],
    operation_id = "deleteMember"
)]
#[delete("/members/{id}")]
pub async fn delete_member(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.members.delete(MemberId::new(path.into_inner())).await?;
    Ok(web::Json(MessageResponse::deleted("Member")))
}

#[cfg(test)]
#[path = "members_tests.rs"]
mod tests;
