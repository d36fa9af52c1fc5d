//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{
    MockBlogsCommand, MockBlogsQuery, MockDepartmentsCommand, MockDepartmentsQuery,
    MockMembersCommand, MockMembersQuery,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

const BOUNDARY: &str = "clubsite-test-boundary";

/// Builder for `multipart/form-data` request bodies.
#[derive(Debug, Default)]
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text part.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    /// Append a file part.
    pub fn file(mut self, name: &str, file_name: &str, content: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(content);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    /// Close the body, returning the content type header value and the bytes.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (format!("multipart/form-data; boundary={BOUNDARY}"), self.bytes)
    }
}

/// Mock driving ports; set expectations, then call [`MockPorts::into_state`].
#[derive(Default)]
pub struct MockPorts {
    pub departments: MockDepartmentsCommand,
    pub departments_query: MockDepartmentsQuery,
    pub members: MockMembersCommand,
    pub members_query: MockMembersQuery,
    pub blogs: MockBlogsCommand,
    pub blogs_query: MockBlogsQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            departments: Arc::new(self.departments),
            departments_query: Arc::new(self.departments_query),
            members: Arc::new(self.members),
            members_query: Arc::new(self.members_query),
            blogs: Arc::new(self.blogs),
            blogs_query: Arc::new(self.blogs_query),
        })
    }
}

/// App wired like production: domain-shaped extractor errors and every
/// entity route under `/api`.
pub fn test_app(
    state: HttpState,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    actix_web::App::new()
        .app_data(actix_web::web::Data::new(state))
        .app_data(crate::inbound::http::validation::json_config())
        .app_data(crate::inbound::http::validation::query_config())
        .app_data(crate::inbound::http::validation::path_config())
        .service(crate::inbound::http::root::welcome)
        .service(actix_web::web::scope("/api").configure(crate::inbound::http::configure_api))
}
