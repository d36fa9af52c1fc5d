//! Blog post HTTP handlers.
//!
//! ```text
//! POST   /api/blogs              multipart: title, author, body, photo?
//! GET    /api/blogs?skip=&limit=
//! GET    /api/blogs/{id}
//! PUT    /api/blogs/{id}         JSON: title, author, body
//! PUT    /api/blogs/{id}/cover   multipart: photo
//! DELETE /api/blogs/{id}
//! ```

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CreateBlogRequest;
use crate::domain::{Blog, BlogDraft, BlogId, BlogUpdate, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::multipart::{FormSchema, read_form};
use crate::inbound::http::schemas::{ErrorSchema, MessageResponse, PageParams};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_page};

const TITLE: FieldName = FieldName::new("title");
const AUTHOR: FieldName = FieldName::new("author");
const BODY: FieldName = FieldName::new("body");
const PHOTO: FieldName = FieldName::new("photo");

const BLOG_FORM: FormSchema = FormSchema {
    text: &[TITLE, AUTHOR, BODY],
    file: PHOTO,
};

const COVER_FORM: FormSchema = FormSchema {
    text: &[],
    file: PHOTO,
};

/// Multipart fields accepted when publishing a post.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BlogForm {
    #[schema(example = "Spring meetup recap")]
    title: String,
    #[schema(example = "Grace Hopper")]
    author: String,
    body: String,
    /// Cover image; the placeholder is used when absent.
    #[schema(value_type = Option<String>, format = Binary)]
    photo: Option<Vec<u8>>,
}

/// Multipart body for replacing a cover.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CoverForm {
    #[schema(value_type = String, format = Binary)]
    photo: Vec<u8>,
}

/// JSON payload overwriting a post's text.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct BlogTextRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
}

impl BlogTextRequest {
    fn into_update(self) -> Result<BlogUpdate, Error> {
        let title = self.title.ok_or_else(|| missing_field_error(TITLE))?;
        let author = self.author.ok_or_else(|| missing_field_error(AUTHOR))?;
        let body = self.body.ok_or_else(|| missing_field_error(BODY))?;
        Ok(BlogDraft::try_new(&title, &author, &body)?.into())
    }
}

/// Blog post as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlogResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub cover_image_uri: String,
    pub body: String,
}

impl From<Blog> for BlogResponse {
    fn from(value: Blog) -> Self {
        Self {
            id: value.id.get(),
            title: value.title,
            author: value.author,
            cover_image_uri: value.cover_image_uri.as_str().to_owned(),
            body: value.body,
        }
    }
}

/// Publish a post, uploading the cover first when one is sent.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body(content = BlogForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created post", body = BlogResponse),
        (status = 400, description = "Invalid form", body = ErrorSchema),
        (status = 502, description = "Cover upload failed", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "createBlog"
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    payload: Multipart,
) -> ApiResult<web::Json<BlogResponse>> {
    let mut form = read_form(payload, BLOG_FORM).await?;
    let draft = BlogDraft::try_new(
        form.required(TITLE)?,
        form.required(AUTHOR)?,
        form.required(BODY)?,
    )?;
    let blog = state
        .blogs
        .create(CreateBlogRequest {
            draft,
            photo: form.take_photo(),
        })
        .await?;
    Ok(web::Json(blog.into()))
}

/// List posts ordered by id.
#[utoipa::path(
    get,
    path = "/api/blogs",
    params(PageParams),
    responses(
        (status = 200, description = "One page of posts", body = [BlogResponse]),
        (status = 400, description = "Invalid pagination", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs"
)]
#[get("/blogs")]
pub async fn list_blogs(
    state: web::Data<HttpState>,
    query: web::Query<PageParams>,
) -> ApiResult<web::Json<Vec<BlogResponse>>> {
    let page = parse_page(query.into_inner().into())?;
    let blogs = state.blogs_query.list(page).await?;
    Ok(web::Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Fetch one post.
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = i32, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Post", body = BlogResponse),
        (status = 404, description = "Unknown post", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "getBlog"
)]
#[get("/blogs/{id}")]
pub async fn get_blog(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<BlogResponse>> {
    let blog = state.blogs_query.get(BlogId::new(path.into_inner())).await?;
    Ok(web::Json(blog.into()))
}

/// Overwrite a post's title, author and body.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(("id" = i32, Path, description = "Blog id")),
    request_body = BlogTextRequest,
    responses(
        (status = 200, description = "Updated post", body = BlogResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown post", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "updateBlog"
)]
#[put("/blogs/{id}")]
pub async fn update_blog(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<BlogTextRequest>,
) -> ApiResult<web::Json<BlogResponse>> {
    let update = payload.into_inner().into_update()?;
    let blog = state
        .blogs
        .update(BlogId::new(path.into_inner()), update)
        .await?;
    Ok(web::Json(blog.into()))
}

/// Upload a new cover and release the previous one.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}/cover",
    params(("id" = i32, Path, description = "Blog id")),
    request_body(content = CoverForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Post with its new cover", body = BlogResponse),
        (status = 400, description = "No photo sent", body = ErrorSchema),
        (status = 404, description = "Unknown post", body = ErrorSchema),
        (status = 502, description = "Cover exchange failed", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "replaceBlogCover"
)]
#[put("/blogs/{id}/cover")]
pub async fn replace_blog_cover(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: Multipart,
) -> ApiResult<web::Json<BlogResponse>> {
    let mut form = read_form(payload, COVER_FORM).await?;
    let photo = form.take_photo().ok_or_else(|| missing_field_error(PHOTO))?;
    let blog = state
        .blogs
        .replace_cover(BlogId::new(path.into_inner()), photo)
        .await?;
    Ok(web::Json(blog.into()))
}

/// Release the cover, then delete the post.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = i32, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 404, description = "Unknown post", body = ErrorSchema),
        (status = 502, description = "Cover release failed; post kept", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog"
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.blogs.delete(BlogId::new(path.into_inner())).await?;
    Ok(web::Json(MessageResponse::deleted("Blog")))
}

#[cfg(test)]
#[path = "blogs_tests.rs"]
mod tests;
