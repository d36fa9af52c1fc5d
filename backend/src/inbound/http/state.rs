//! Shared HTTP adapter state.
//!
//! Handlers receive this state through `actix_web::web::Data` and depend only
//! on the driving ports, so they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BlogsCommand, BlogsQuery, DepartmentsCommand, DepartmentsQuery, MembersCommand, MembersQuery,
};

/// Parameter object bundling the port implementations handlers call.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub departments: Arc<dyn DepartmentsCommand>,
    pub departments_query: Arc<dyn DepartmentsQuery>,
    pub members: Arc<dyn MembersCommand>,
    pub members_query: Arc<dyn MembersQuery>,
    pub blogs: Arc<dyn BlogsCommand>,
    pub blogs_query: Arc<dyn BlogsQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub departments: Arc<dyn DepartmentsCommand>,
    pub departments_query: Arc<dyn DepartmentsQuery>,
    pub members: Arc<dyn MembersCommand>,
    pub members_query: Arc<dyn MembersQuery>,
    pub blogs: Arc<dyn BlogsCommand>,
    pub blogs_query: Arc<dyn BlogsQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            departments,
            departments_query,
            members,
            members_query,
            blogs,
            blogs_query,
        } = ports;
        Self {
            departments,
            departments_query,
            members,
            members_query,
            blogs,
            blogs_query,
        }
    }
}
