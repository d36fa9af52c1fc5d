//! Photo lifecycle coordination.
//!
//! Decides, for each entity mutation, whether a photo is uploaded, kept, or
//! released. Uploads always happen before the owning row is written, so a
//! failed upload never leaves a row pointing at nothing. The shared
//! placeholder is never sent to the blob store.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{BlobStore, BlobStoreError};
use crate::domain::{Error, PLACEHOLDER_PHOTO_URL, PhotoFolder, PhotoUpload, PhotoUri};

/// Map a blob store failure onto the `upstream_store` error code.
pub(crate) fn map_blob_error(error: BlobStoreError) -> Error {
    Error::upstream_store(format!("photo storage failed: {error}"))
}

/// Coordinates photo uploads and releases against a [`BlobStore`].
pub struct PhotoLifecycle<B> {
    store: Arc<B>,
    placeholder: PhotoUri,
}

impl<B> Clone for PhotoLifecycle<B> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            placeholder: self.placeholder.clone(),
        }
    }
}

impl<B> PhotoLifecycle<B> {
    /// Create a coordinator using `placeholder` for entities without a photo.
    pub fn new(store: Arc<B>, placeholder: PhotoUri) -> Self {
        Self { store, placeholder }
    }

    /// URI assigned to entities without an uploaded photo.
    pub fn placeholder(&self) -> &PhotoUri {
        &self.placeholder
    }

    /// Whether `uri` is the configured or built-in placeholder.
    pub fn is_placeholder(&self, uri: &PhotoUri) -> bool {
        uri == &self.placeholder || uri.as_str() == PLACEHOLDER_PHOTO_URL
    }
}

impl<B: BlobStore> PhotoLifecycle<B> {
    /// Resolve the URI for a new entity.
    ///
    /// Uploads `upload` to `{folder}/{name}.{ext}` when present and falls back
    /// to the placeholder otherwise.
    ///
    /// # Errors
    /// Propagates the blob store failure; no URI is produced in that case.
    pub async fn store(
        &self,
        upload: Option<PhotoUpload>,
        folder: PhotoFolder,
        name: &str,
    ) -> Result<PhotoUri, BlobStoreError> {
        match upload {
            Some(upload) => self.upload(upload, folder, name).await,
            None => Ok(self.placeholder.clone()),
        }
    }

    /// Upload a replacement photo and release `current`.
    ///
    /// The old photo is released only when it is not the placeholder and the
    /// store handed back a different URL. When the release fails the fresh
    /// upload is discarded so the caller can abort without leaking it.
    ///
    /// # Errors
    /// Returns the upload or release failure.
    pub async fn replace(
        &self,
        current: &PhotoUri,
        upload: PhotoUpload,
        folder: PhotoFolder,
        name: &str,
    ) -> Result<PhotoUri, BlobStoreError> {
        let fresh = self.upload(upload, folder, name).await?;
        if &fresh == current {
            return Ok(fresh);
        }
        if let Err(err) = self.release(current).await {
            self.discard(&fresh).await;
            return Err(err);
        }
        Ok(fresh)
    }

    /// Release a photo that is no longer referenced.
    ///
    /// Placeholders are skipped without contacting the store.
    ///
    /// # Errors
    /// Propagates the blob store failure.
    pub async fn release(&self, uri: &PhotoUri) -> Result<(), BlobStoreError> {
        if self.is_placeholder(uri) {
            return Ok(());
        }
        info!(url = %uri, "releasing photo");
        self.store.delete(std::slice::from_ref(uri)).await
    }

    /// Best-effort release used to roll back a fresh upload.
    ///
    /// Failures are logged and swallowed.
    pub async fn discard(&self, uri: &PhotoUri) {
        if let Err(error) = self.release(uri).await {
            warn!(url = %uri, %error, "failed to discard orphaned photo");
        }
    }

    async fn upload(
        &self,
        upload: PhotoUpload,
        folder: PhotoFolder,
        name: &str,
    ) -> Result<PhotoUri, BlobStoreError> {
        let object = upload.into_blob_object(folder, name);
        info!(path = %object.path, content_type = object.content_type, "uploading photo");
        self.store.put(object).await
    }
}
