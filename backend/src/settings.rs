//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `COINBOARD_*` environment variables and an
//! optional configuration file. Optional fields fall back to defaults in
//! their accessors.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_COIN_API_BASE_URL: &str = "https://api.coincap.io";
const DEFAULT_COINS_ENDPOINT: &str = "/v2/assets";
const DEFAULT_COIN_API_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the coinboard server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COINBOARD")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection URL. Fixture adapters are used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Base URL of the upstream coin API.
    pub coin_api_base_url: Option<String>,
    /// Path of the coin listing endpoint, joined onto the base URL.
    pub coins_endpoint: Option<String>,
    /// Upstream request timeout in seconds.
    pub coin_api_timeout_secs: Option<u64>,
    /// Apply pending migrations before serving traffic.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl AppSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// The database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    pub fn coin_api_base_url(&self) -> &str {
        self.coin_api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_COIN_API_BASE_URL)
    }

    pub fn coins_endpoint(&self) -> &str {
        self.coins_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_COINS_ENDPOINT)
    }

    pub fn coin_api_timeout(&self) -> Duration {
        Duration::from_secs(
            self.coin_api_timeout_secs
                .unwrap_or(DEFAULT_COIN_API_TIMEOUT_SECS),
        )
    }

}
