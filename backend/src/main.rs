//! Backend entry-point: loads settings, migrates the database and serves the
//! REST API.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::blob::{BlobStoreCredentials, HttpBlobStore};
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let database_url = settings.database_url()?;
    let bind_addr = settings.bind_addr()?;

    let applied = run_pending_migrations(database_url)
        .await
        .wrap_err("failed to migrate database")?;
    info!(applied, "database schema ready");

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .wrap_err("failed to build database pool")?;

    let blob_store = HttpBlobStore::new(
        settings.blob_base_url()?,
        BlobStoreCredentials::new(settings.blob_token()?),
        settings.blob_timeout(),
    )
    .wrap_err("failed to build blob store client")?;

    let config = ServerConfig::new(bind_addr, pool, Arc::new(blob_store))
        .with_placeholder(settings.placeholder_photo())
        .with_cors_allowed_origins(settings.cors_allowed_origins());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await?;
    Ok(())
}
