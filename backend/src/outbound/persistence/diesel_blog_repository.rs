//! PostgreSQL-backed `BlogRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::Page;

use crate::domain::ports::{BlogRepository, BlogRepositoryError};
use crate::domain::{Blog, BlogId, BlogUpdate, NewBlog, PhotoUri};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BlogRow, BlogTextChanges, NewBlogRow};
use super::pool::{DbPool, PoolError};
use super::schema::blogs;

/// Diesel-backed implementation of the blog repository port.
#[derive(Clone)]
pub struct DieselBlogRepository {
    pool: DbPool,
}

impl DieselBlogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BlogRepositoryError {
    map_basic_pool_error(error, BlogRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BlogRepositoryError {
    map_basic_diesel_error(
        error,
        BlogRepositoryError::query,
        BlogRepositoryError::connection,
    )
}

#[async_trait]
impl BlogRepository for DieselBlogRepository {
    async fn insert(&self, blog: &NewBlog) -> Result<Blog, BlogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewBlogRow {
            title: blog.draft.title(),
            author: blog.draft.author(),
            cover_image_uri: blog.cover_image_uri.as_str(),
            body: blog.draft.body(),
        };
        let stored: BlogRow = diesel::insert_into(blogs::table)
            .values(&row)
            .returning(BlogRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(stored.into())
    }

    async fn list(&self, page: Page) -> Result<Vec<Blog>, BlogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<BlogRow> = blogs::table
            .order(blogs::id.asc())
            .offset(page.offset())
            .limit(page.limit())
            .select(BlogRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<BlogRow> = blogs::table
            .find(id.get())
            .select(BlogRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Blog::from))
    }

    async fn update(
        &self,
        id: BlogId,
        update: &BlogUpdate,
    ) -> Result<Option<Blog>, BlogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = BlogTextChanges {
            title: &update.title,
            author: &update.author,
            body: &update.body,
        };
        let row: Option<BlogRow> = diesel::update(blogs::table.find(id.get()))
            .set(&changes)
            .returning(BlogRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Blog::from))
    }

    async fn set_cover(
        &self,
        id: BlogId,
        cover_image_uri: &PhotoUri,
    ) -> Result<Option<Blog>, BlogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<BlogRow> = diesel::update(blogs::table.find(id.get()))
            .set(blogs::cover_image_uri.eq(cover_image_uri.as_str()))
            .returning(BlogRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Blog::from))
    }

    async fn delete(&self, id: BlogId) -> Result<bool, BlogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(blogs::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
