//! Port for blog post persistence.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Blog, BlogId, BlogUpdate, NewBlog, PhotoUri};

use super::define_port_error;

define_port_error! {
    /// Errors raised by blog repository adapters.
    pub enum BlogRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "blog repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "blog repository query failed: {message}",
    }
}

/// Port for storing blog posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a post and return the stored row.
    async fn insert(&self, blog: &NewBlog) -> Result<Blog, BlogRepositoryError>;

    /// List posts ordered by id.
    async fn list(&self, page: Page) -> Result<Vec<Blog>, BlogRepositoryError>;

    /// Fetch one post; `None` when absent.
    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Overwrite the text columns; `None` when absent.
    async fn update(
        &self,
        id: BlogId,
        update: &BlogUpdate,
    ) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Point the post at a new cover image; `None` when absent.
    async fn set_cover(
        &self,
        id: BlogId,
        cover_image_uri: &PhotoUri,
    ) -> Result<Option<Blog>, BlogRepositoryError>;

    /// Delete the post; `false` when absent.
    async fn delete(&self, id: BlogId) -> Result<bool, BlogRepositoryError>;
}
