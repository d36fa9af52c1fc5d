//! Reqwest-backed blob store adapter.
//!
//! Owns transport details only: endpoint construction, protocol headers,
//! status mapping and decoding of the upload response. No retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::{DeleteRequestDto, PutResponseDto};
use crate::domain::ports::{BlobStore, BlobStoreError};
use crate::domain::{BlobObject, PhotoUri};

const API_VERSION: &str = "4";
const CACHE_MAX_AGE_SECONDS: &str = "31536000";
const PUBLIC_ACCESS: &str = "public";

/// Bearer credential for the blob store.
#[derive(Clone)]
pub struct BlobStoreCredentials {
    token: String,
}

impl BlobStoreCredentials {
    /// Wrap a read/write token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl std::fmt::Debug for BlobStoreCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BlobStoreCredentials(**redacted**)")
    }
}

/// Blob store adapter issuing one HTTP request per port call.
pub struct HttpBlobStore {
    client: Client,
    base_url: Url,
    credentials: BlobStoreCredentials,
}

impl HttpBlobStore {
    /// Build an adapter for the store rooted at `base_url`.
    ///
    /// `timeout` bounds each request; `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        credentials: BlobStoreCredentials,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
            credentials,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BlobStoreError> {
        endpoint(&self.base_url, path)
    }
}

/// Append `path` to `base_url` one segment at a time.
///
/// Each segment is percent-encoded, so `?`, `#` and `%` in entity names stay
/// part of the object name instead of starting a query or fragment.
fn endpoint(base_url: &Url, path: &str) -> Result<Url, BlobStoreError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| {
            BlobStoreError::transport(format!("blob base URL {base_url} cannot hold a path"))
        })?
        .pop_if_empty()
        .extend(path.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn put(&self, object: BlobObject) -> Result<PhotoUri, BlobStoreError> {
        let url = self.endpoint(&object.path)?;
        debug!(path = %object.path, bytes = object.content.len(), "uploading blob");
        let response = self
            .client
            .put(url)
            .header("access", PUBLIC_ACCESS)
            .header(reqwest::header::AUTHORIZATION, self.credentials.bearer())
            .header("x-api-version", API_VERSION)
            .header("x-content-type", object.content_type)
            .header("x-cache-control-max-age", CACHE_MAX_AGE_SECONDS)
            .body(object.content)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_put_response(body.as_ref())
    }

    async fn delete(&self, urls: &[PhotoUri]) -> Result<(), BlobStoreError> {
        if urls.is_empty() {
            return Ok(());
        }
        let payload = DeleteRequestDto {
            urls: urls.iter().map(PhotoUri::as_str).collect(),
        };
        let response = self
            .client
            .delete(self.endpoint("delete")?)
            .header(reqwest::header::AUTHORIZATION, self.credentials.bearer())
            .header("x-api-version", API_VERSION)
            .json(&payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status, body.as_ref()))
    }
}

fn parse_put_response(body: &[u8]) -> Result<PhotoUri, BlobStoreError> {
    let decoded: PutResponseDto = serde_json::from_slice(body)
        .map_err(|err| BlobStoreError::decode(format!("invalid upload response: {err}")))?;
    if decoded.url.trim().is_empty() {
        return Err(BlobStoreError::decode("upload response carried an empty url"));
    }
    Ok(PhotoUri::new(decoded.url))
}

fn map_transport_error(error: reqwest::Error) -> BlobStoreError {
    BlobStoreError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> BlobStoreError {
    BlobStoreError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
