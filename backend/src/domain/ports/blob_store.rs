//! Port for the external object store holding photo binaries.

use async_trait::async_trait;

use crate::domain::{BlobObject, PhotoUri};

use super::define_port_error;

define_port_error! {
    /// Errors raised by blob store adapters.
    pub enum BlobStoreError {
        /// The request never produced a response (connect, TLS, timeout).
        Transport { message: String } =>
            "blob store transport failed: {message}",
        /// The store answered with a non-success status.
        Status { status: u16, message: String } =>
            "blob store rejected request with status {status}: {message}",
        /// The response body did not carry the expected payload.
        Decode { message: String } =>
            "blob store response could not be decoded: {message}",
    }
}

/// Upload and release photo objects.
///
/// Adapters make exactly one outbound request per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `object` publicly and return the URL it is served from.
    async fn put(&self, object: BlobObject) -> Result<PhotoUri, BlobStoreError>;

    /// Delete the objects served from `urls`.
    async fn delete(&self, urls: &[PhotoUri]) -> Result<(), BlobStoreError>;
}
