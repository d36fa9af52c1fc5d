//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`BlobStore`]) are implemented by outbound
//! adapters. Driving ports (`*Command`, `*Query`) are implemented by the
//! domain services and consumed by the HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod blob_store;
mod blog_repository;
mod blogs_command;
mod blogs_query;
mod department_repository;
mod departments_command;
mod departments_query;
mod member_repository;
mod members_command;
mod members_query;

#[cfg(test)]
pub use blob_store::MockBlobStore;
pub use blob_store::{BlobStore, BlobStoreError};
#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogRepository, BlogRepositoryError};
#[cfg(test)]
pub use blogs_command::MockBlogsCommand;
pub use blogs_command::{BlogsCommand, CreateBlogRequest};
#[cfg(test)]
pub use blogs_query::MockBlogsQuery;
pub use blogs_query::BlogsQuery;
#[cfg(test)]
pub use department_repository::MockDepartmentRepository;
pub use department_repository::{DepartmentRepository, DepartmentRepositoryError};
#[cfg(test)]
pub use departments_command::MockDepartmentsCommand;
pub use departments_command::DepartmentsCommand;
#[cfg(test)]
pub use departments_query::MockDepartmentsQuery;
pub use departments_query::DepartmentsQuery;
#[cfg(test)]
pub use member_repository::MockMemberRepository;
pub use member_repository::{MemberRepository, MemberRepositoryError};
#[cfg(test)]
pub use members_command::MockMembersCommand;
pub use members_command::{CreateMemberRequest, MembersCommand, UpdateMemberRequest};
#[cfg(test)]
pub use members_query::MockMembersQuery;
pub use members_query::MembersQuery;
