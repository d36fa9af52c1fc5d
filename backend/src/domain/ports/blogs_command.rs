//! Driving port for blog post mutations.

use async_trait::async_trait;

use crate::domain::{Blog, BlogDraft, BlogId, BlogUpdate, Error, PhotoUpload};

/// Request to publish a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBlogRequest {
    /// Validated post text.
    pub draft: BlogDraft,
    /// Optional cover image; the placeholder is used when absent.
    pub photo: Option<PhotoUpload>,
}

/// Inbound contract for blog post mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogsCommand: Send + Sync {
    /// Publish a post.
    ///
    /// # Errors
    /// Returns `upstream_store` when the cover cannot be uploaded.
    async fn create(&self, request: CreateBlogRequest) -> Result<Blog, Error>;

    /// Overwrite a post's text; the cover is left untouched.
    ///
    /// # Errors
    /// Returns `not_found` for an unknown id.
    async fn update(&self, id: BlogId, update: BlogUpdate) -> Result<Blog, Error>;

    /// Upload a new cover and release the previous one.
    ///
    /// # Errors
    /// Returns `not_found` for an unknown id and `upstream_store` when the
    /// exchange with the blob store fails.
    async fn replace_cover(&self, id: BlogId, photo: PhotoUpload) -> Result<Blog, Error>;

    /// Release the cover, then delete the post.
    ///
    /// # Errors
    /// Returns `not_found` for an unknown id and `upstream_store` when the
    /// cover cannot be released.
    async fn delete(&self, id: BlogId) -> Result<(), Error>;
}
