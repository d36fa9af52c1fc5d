//! Runtime configuration loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, `CLUBSITE_*` environment variables and
//! an optional configuration file. Optional fields fall back to the defaults
//! exposed through the accessor methods.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::domain::{PLACEHOLDER_PHOTO_URL, PhotoUri};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BLOB_BASE_URL: &str = "https://blob.vercel-storage.com";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Invalid or missing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A required key had no value.
    #[error("missing required setting `{key}`")]
    Missing { key: &'static str },
    /// A key was present but could not be parsed.
    #[error("invalid value for `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}

impl SettingsError {
    fn invalid(key: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            key,
            message: message.to_string(),
        }
    }
}

/// Configuration values for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLUBSITE")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Socket address the server listens on.
    pub bind_addr: Option<String>,
    /// Base URL of the blob-store API.
    pub blob_base_url: Option<String>,
    /// Bearer token for blob-store writes.
    pub blob_token: Option<String>,
    /// Per-request timeout for blob-store calls; unbounded when absent.
    pub blob_timeout_secs: Option<u64>,
    /// Photo URL stored when no photo is uploaded.
    pub placeholder_photo_url: Option<String>,
    /// Comma-separated origins allowed by CORS; empty allows any origin.
    pub cors_allowed_origins: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// Return the database URL or report it missing.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        required(self.database_url.as_deref(), "database_url")
    }

    /// Parse the bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .map_err(|err| SettingsError::invalid("bind_addr", err))
    }

    /// Parse the blob-store base URL.
    pub fn blob_base_url(&self) -> Result<Url, SettingsError> {
        Url::parse(self.blob_base_url.as_deref().unwrap_or(DEFAULT_BLOB_BASE_URL))
            .map_err(|err| SettingsError::invalid("blob_base_url", err))
    }

    /// Return the blob-store token or report it missing.
    pub fn blob_token(&self) -> Result<&str, SettingsError> {
        required(self.blob_token.as_deref(), "blob_token")
    }

    /// Blob-store request timeout, if one is configured.
    pub fn blob_timeout(&self) -> Option<Duration> {
        self.blob_timeout_secs.map(Duration::from_secs)
    }

    /// Placeholder photo URI, falling back to the built-in image.
    pub fn placeholder_photo(&self) -> PhotoUri {
        PhotoUri::new(
            self.placeholder_photo_url
                .as_deref()
                .unwrap_or(PLACEHOLDER_PHOTO_URL),
        )
    }

    /// Split the configured CORS origins, dropping blank entries.
    pub fn cors_allowed_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Pool size cap, falling back to 10 connections.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, SettingsError> {
    match value.map(str::trim) {
        Some(found) if !found.is_empty() => Ok(found),
        _ => Err(SettingsError::Missing { key }),
    }
}
