//! Server entry-point: loads settings, prepares adapters and serves the
//! coin endpoints.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use coinboard::inbound::http::health::HealthState;
use coinboard::outbound::coin_api::CoinApiHttpSource;
use coinboard::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use coinboard::settings::AppSettings;
use server::{ServerConfig, create_server};

async fn connect_database(
    settings: &AppSettings,
    database_url: &str,
) -> color_eyre::Result<DbPool> {
    if settings.run_migrations {
        run_pending_migrations(database_url)
            .await
            .wrap_err("failed to apply database migrations")?;
    }
    let config = PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
    DbPool::new(config)
        .await
        .wrap_err("failed to build database pool")
}

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

    let coin_source = CoinApiHttpSource::new(
        settings.coin_api_base_url(),
        settings.coins_endpoint(),
        settings.coin_api_timeout(),
    )
    .wrap_err("invalid coin API configuration")?;
    info!(endpoint = %coin_source.endpoint(), "coin API configured");

    let mut config = ServerConfig::new(settings.bind_addr(), coin_source);
    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(connect_database(&settings, database_url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {}", settings.bind_addr()))?;
    info!(addr = %settings.bind_addr(), "listening");

    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}
