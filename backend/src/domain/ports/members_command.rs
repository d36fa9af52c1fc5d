//! Driving port for member mutations.
//!
//! Member writes may carry a photo. The implementation uploads it before the
//! row is written and releases any photo the write makes obsolete.

use async_trait::async_trait;

use crate::domain::{Error, Member, MemberDraft, MemberId, PhotoUpload};

/// Request to create a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMemberRequest {
    /// Validated member fields.
    pub draft: MemberDraft,
    /// Optional portrait; the placeholder is used when absent.
    pub photo: Option<PhotoUpload>,
}

/// Request to overwrite a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMemberRequest {
    /// Member to overwrite.
    pub id: MemberId,
    /// Replacement fields, including the full department set.
    pub draft: MemberDraft,
    /// Optional replacement portrait; the current one is kept when absent.
    pub photo: Option<PhotoUpload>,
}

/// Inbound contract for member mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembersCommand: Send + Sync {
    /// Create a member.
    ///
    /// # Errors
    /// Returns `upstream_store` when the photo cannot be uploaded; nothing is
    /// persisted in that case.
    async fn create(&self, request: CreateMemberRequest) -> Result<Member, Error>;

    /// Overwrite a member.
    ///
    /// # Errors
    /// Returns `not_found` for an unknown id and `upstream_store` when the
    /// photo exchange fails.
    async fn update(&self, request: UpdateMemberRequest) -> Result<Member, Error>;

    /// Release the member's photo, then delete the member.
    ///
    /// # Errors
    /// Returns `not_found` for an unknown id and `upstream_store` when the
    /// photo cannot be released; the member is kept in that case.
    async fn delete(&self, id: MemberId) -> Result<(), Error>;
}
