//! Driving port for member reads.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Error, Member, MemberFilter, MemberId};

/// Inbound contract for reading members.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembersQuery: Send + Sync {
    /// List one page of members ordered by id.
    async fn list(&self, page: Page, filter: MemberFilter) -> Result<Vec<Member>, Error>;

    /// Fetch a member by id; `not_found` when absent.
    async fn get(&self, id: MemberId) -> Result<Member, Error>;
}
