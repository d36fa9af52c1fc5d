//! Blob store outbound adapter.
//!
//! Implements the `BlobStore` port against the object store's HTTP protocol.

mod dto;
mod http_store;

pub use http_store::{BlobStoreCredentials, HttpBlobStore};
