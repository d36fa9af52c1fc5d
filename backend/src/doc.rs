//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every handler in the inbound layer (departments, members,
//!   blogs, the welcome route and health probes)
//! - **Schemas**: request and response bodies plus the wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that document domain types
//!   without coupling them to utoipa
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::blogs::{BlogForm, BlogResponse, BlogTextRequest, CoverForm};
use crate::inbound::http::departments::{DepartmentRequest, DepartmentResponse};
use crate::inbound::http::members::{MemberForm, MemberResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, MessageResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Club site backend API",
        description = "CRUD interface for departments, members and blog posts, with photo storage."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::welcome,
        crate::inbound::http::departments::create_department,
        crate::inbound::http::departments::list_departments,
        crate::inbound::http::departments::get_department,
        crate::inbound::http::departments::update_department,
        crate::inbound::http::departments::delete_department,
        crate::inbound::http::members::create_member,
        crate::inbound::http::members::list_members,
        crate::inbound::http::members::get_member,
        crate::inbound::http::members::update_member,
        crate::inbound::http::members::delete_member,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::get_blog,
        crate::inbound::http::blogs::update_blog,
        crate::inbound::http::blogs::replace_blog_cover,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DepartmentRequest,
        DepartmentResponse,
        MemberForm,
        MemberResponse,
        BlogForm,
        CoverForm,
        BlogTextRequest,
        BlogResponse,
        MessageResponse,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "root", description = "Service welcome message"),
        (name = "departments", description = "Club departments"),
        (name = "members", description = "Club members and their departments"),
        (name = "blogs", description = "Blog posts and cover images"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
