//! Domain entities, value types, services and ports.
//!
//! Purpose: model the club's departments, members and blog posts, and the
//! photo lifecycle that ties member portraits and blog covers to the external
//! blob store. Nothing in this module knows about HTTP or SQL; adapters reach
//! it only through [`ports`].
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`Department`], [`Member`], [`Blog`] and their validated write models.
//! - [`PhotoLifecycle`]: upload, replace and release coordination.
//! - [`DepartmentService`], [`MemberService`], [`BlogService`]: driving-port
//!   implementations.

pub mod error;
pub mod ports;

mod blog;
mod blog_service;
mod department;
mod department_service;
mod fields;
mod ids;
mod member;
mod member_service;
mod photo;
mod photo_lifecycle;
mod trace_id;

pub use self::blog::{AUTHOR_MAX_CHARS, Blog, BlogDraft, BlogUpdate, NewBlog, TITLE_MAX_CHARS};
pub use self::blog_service::BlogService;
pub use self::department::{Department, DepartmentUpdate, NewDepartment};
pub use self::department_service::DepartmentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fields::FieldValidationError;
pub use self::ids::{BlogId, DepartmentId, MemberId};
pub use self::member::{Member, MemberDraft, MemberFilter, MemberUpdate, NewMember};
pub use self::member_service::MemberService;
pub use self::photo::{
    BlobObject, PLACEHOLDER_PHOTO_URL, PhotoFolder, PhotoUpload, PhotoUri, guess_content_type,
    object_path,
};
pub use self::photo_lifecycle::PhotoLifecycle;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("department 3 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
