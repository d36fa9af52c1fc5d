//! Member domain service.
//!
//! Implements the member driving ports. Photos are exchanged with the blob
//! store before the member row is written; a write that fails afterwards
//! discards the fresh upload again.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;

use crate::domain::photo_lifecycle::map_blob_error;
use crate::domain::ports::{
    BlobStore, CreateMemberRequest, MemberRepository, MemberRepositoryError, MembersCommand,
    MembersQuery, UpdateMemberRequest,
};
use crate::domain::{
    Error, Member, MemberFilter, MemberId, MemberUpdate, NewMember, PhotoFolder, PhotoLifecycle,
    PhotoUri,
};

/// Member service implementing the member driving ports.
pub struct MemberService<R, B> {
    repo: Arc<R>,
    photos: PhotoLifecycle<B>,
}

impl<R, B> Clone for MemberService<R, B> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            photos: self.photos.clone(),
        }
    }
}

impl<R, B> MemberService<R, B> {
    /// Create a service over the repository and photo coordinator.
    pub fn new(repo: Arc<R>, photos: PhotoLifecycle<B>) -> Self {
        Self { repo, photos }
    }
}

fn map_repository_error(error: MemberRepositoryError) -> Error {
    match error {
        MemberRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("member repository unavailable: {message}"))
        }
        MemberRepositoryError::Query { message } => {
            Error::internal(format!("member repository error: {message}"))
        }
    }
}

fn not_found(id: MemberId) -> Error {
    Error::not_found(format!("member {id} not found"))
}

impl<R, B> MemberService<R, B>
where
    R: MemberRepository,
    B: BlobStore,
{
    async fn existing(&self, id: MemberId) -> Result<Member, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    /// Roll back a photo uploaded for a write that did not land.
    async fn abandon(&self, fresh: &PhotoUri, previous: Option<&PhotoUri>) {
        if previous != Some(fresh) {
            self.photos.discard(fresh).await;
        }
    }
}

#[async_trait]
impl<R, B> MembersCommand for MemberService<R, B>
where
    R: MemberRepository,
    B: BlobStore,
{
    async fn create(&self, request: CreateMemberRequest) -> Result<Member, Error> {
        let CreateMemberRequest { draft, photo } = request;
        let photo_uri = self
            .photos
            .store(photo, PhotoFolder::Members, draft.name())
            .await
            .map_err(map_blob_error)?;

        let record = NewMember {
            draft,
            photo_uri: photo_uri.clone(),
        };
        match self.repo.insert(&record).await {
            Ok(member) => Ok(member),
            Err(err) => {
                self.abandon(&photo_uri, None).await;
                Err(map_repository_error(err))
            }
        }
    }

    async fn update(&self, request: UpdateMemberRequest) -> Result<Member, Error> {
        let UpdateMemberRequest { id, draft, photo } = request;
        let current = self.existing(id).await?;
        let photo_uri = match photo {
            Some(upload) => self
                .photos
                .replace(&current.photo_uri, upload, PhotoFolder::Members, draft.name())
                .await
                .map_err(map_blob_error)?,
            None => current.photo_uri.clone(),
        };

        let update = MemberUpdate::from_draft(draft, photo_uri.clone());
        match self.repo.update(id, &update).await {
            Ok(Some(member)) => Ok(member),
            Ok(None) => {
                self.abandon(&photo_uri, Some(&current.photo_uri)).await;
                Err(not_found(id))
            }
            Err(err) => {
                self.abandon(&photo_uri, Some(&current.photo_uri)).await;
                Err(map_repository_error(err))
            }
        }
    }

    async fn delete(&self, id: MemberId) -> Result<(), Error> {
        let current = self.existing(id).await?;
        self.photos
            .release(&current.photo_uri)
            .await
            .map_err(map_blob_error)?;
        let deleted = self.repo.delete(id).await.map_err(map_repository_error)?;
        if deleted { Ok(()) } else { Err(not_found(id)) }
    }
}

#[async_trait]
impl<R, B> MembersQuery for MemberService<R, B>
where
    R: MemberRepository,
    B: BlobStore,
{
    async fn list(&self, page: Page, filter: MemberFilter) -> Result<Vec<Member>, Error> {
        self.repo
            .list(page, &filter)
            .await
            .map_err(map_repository_error)
    }

    async fn get(&self, id: MemberId) -> Result<Member, Error> {
        self.existing(id).await
    }
}

#[cfg(test)]
#[path = "member_service_tests.rs"]
mod tests;
