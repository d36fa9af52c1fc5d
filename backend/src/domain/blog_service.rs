//! Blog domain service.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;

use crate::domain::photo_lifecycle::map_blob_error;
use crate::domain::ports::{
    BlobStore, BlogRepository, BlogRepositoryError, BlogsCommand, BlogsQuery, CreateBlogRequest,
};
use crate::domain::{
    Blog, BlogId, BlogUpdate, Error, NewBlog, PhotoFolder, PhotoLifecycle, PhotoUpload,
};

/// Blog service implementing the blog driving ports.
pub struct BlogService<R, B> {
    repo: Arc<R>,
    photos: PhotoLifecycle<B>,
}

impl<R, B> Clone for BlogService<R, B> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            photos: self.photos.clone(),
        }
    }
}

impl<R, B> BlogService<R, B> {
    /// Create a service over the repository and photo coordinator.
    pub fn new(repo: Arc<R>, photos: PhotoLifecycle<B>) -> Self {
        Self { repo, photos }
    }
}

fn map_repository_error(error: BlogRepositoryError) -> Error {
    match error {
        BlogRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("blog repository unavailable: {message}"))
        }
        BlogRepositoryError::Query { message } => {
            Error::internal(format!("blog repository error: {message}"))
        }
    }
}

fn not_found(id: BlogId) -> Error {
    Error::not_found(format!("blog {id} not found"))
}

impl<R: BlogRepository, B: BlobStore> BlogService<R, B> {
    async fn existing(&self, id: BlogId) -> Result<Blog, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<R: BlogRepository, B: BlobStore> BlogsCommand for BlogService<R, B> {
    async fn create(&self, request: CreateBlogRequest) -> Result<Blog, Error> {
        let CreateBlogRequest { draft, photo } = request;
        let cover_image_uri = self
            .photos
            .store(photo, PhotoFolder::Blogs, draft.title())
            .await
            .map_err(map_blob_error)?;

        let record = NewBlog {
            draft,
            cover_image_uri: cover_image_uri.clone(),
        };
        match self.repo.insert(&record).await {
            Ok(blog) => Ok(blog),
            Err(err) => {
                self.photos.discard(&cover_image_uri).await;
                Err(map_repository_error(err))
            }
        }
    }

    async fn update(&self, id: BlogId, update: BlogUpdate) -> Result<Blog, Error> {
        self.repo
            .update(id, &update)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn replace_cover(&self, id: BlogId, photo: PhotoUpload) -> Result<Blog, Error> {
        let current = self.existing(id).await?;
        let fresh = self
            .photos
            .replace(
                &current.cover_image_uri,
                photo,
                PhotoFolder::Blogs,
                &current.title,
            )
            .await
            .map_err(map_blob_error)?;

        let outcome = self.repo.set_cover(id, &fresh).await;
        let failure = match outcome {
            Ok(Some(blog)) => return Ok(blog),
            Ok(None) => not_found(id),
            Err(err) => map_repository_error(err),
        };
        if fresh != current.cover_image_uri {
            self.photos.discard(&fresh).await;
        }
        Err(failure)
    }

    async fn delete(&self, id: BlogId) -> Result<(), Error> {
        let current = self.existing(id).await?;
        self.photos
            .release(&current.cover_image_uri)
            .await
            .map_err(map_blob_error)?;
        let deleted = self.repo.delete(id).await.map_err(map_repository_error)?;
        if deleted { Ok(()) } else { Err(not_found(id)) }
    }
}

#[async_trait]
impl<R: BlogRepository, B: BlobStore> BlogsQuery for BlogService<R, B> {
    async fn list(&self, page: Page) -> Result<Vec<Blog>, Error> {
        self.repo.list(page).await.map_err(map_repository_error)
    }

    async fn get(&self, id: BlogId) -> Result<Blog, Error> {
        self.existing(id).await
    }
}
