//! Port for member persistence.
//!
//! Members are stored together with their department memberships. Adapters
//! write the member row and its membership rows atomically and resolve the
//! submitted department ids against existing departments, silently dropping
//! ids that match nothing.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Member, MemberFilter, MemberId, MemberUpdate, NewMember};

use super::define_port_error;

define_port_error! {
    /// Errors raised by member repository adapters.
    pub enum MemberRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "member repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "member repository query failed: {message}",
    }
}

/// Port for storing members and their department memberships.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a member with its memberships and return the stored member.
    async fn insert(&self, member: &NewMember) -> Result<Member, MemberRepositoryError>;

    /// List members ordered by id, optionally filtered by role.
    async fn list(
        &self,
        page: Page,
        filter: &MemberFilter,
    ) -> Result<Vec<Member>, MemberRepositoryError>;

    /// Fetch one member with departments; `None` when absent.
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, MemberRepositoryError>;

    /// Overwrite every field and rebuild the membership set; `None` when absent.
    async fn update(
        &self,
        id: MemberId,
        update: &MemberUpdate,
    ) -> Result<Option<Member>, MemberRepositoryError>;

    /// Delete the member and its memberships; `false` when absent.
    async fn delete(&self, id: MemberId) -> Result<bool, MemberRepositoryError>;
}
