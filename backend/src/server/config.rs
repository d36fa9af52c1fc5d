//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use backend::domain::PhotoUri;
use backend::outbound::blob::HttpBlobStore;
use backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) blob_store: Arc<HttpBlobStore>,
    pub(crate) placeholder: PhotoUri,
    pub(crate) cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Construct a configuration with the default placeholder photo and
    /// permissive CORS.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, blob_store: Arc<HttpBlobStore>) -> Self {
        Self {
            bind_addr,
            db_pool,
            blob_store,
            placeholder: PhotoUri::placeholder(),
            cors_allowed_origins: Vec::new(),
        }
    }

    /// Override the photo URI stored when no photo is uploaded.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: PhotoUri) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Restrict CORS to the given origins; an empty list allows any origin.
    #[must_use]
    pub fn with_cors_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_allowed_origins = origins;
        self
    }
}
