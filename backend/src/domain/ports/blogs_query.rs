//! Driving port for blog post reads.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Blog, BlogId, Error};

/// Inbound contract for reading blog posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogsQuery: Send + Sync {
    /// List one page of posts ordered by id.
    async fn list(&self, page: Page) -> Result<Vec<Blog>, Error>;

    /// Fetch a post by id; `not_found` when absent.
    async fn get(&self, id: BlogId) -> Result<Blog, Error>;
}
