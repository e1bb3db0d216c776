//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use coinboard::outbound::coin_api::CoinApiHttpSource;
use coinboard::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) coin_source: Arc<CoinApiHttpSource>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration that serves fixture identities and keeps
    /// favourites in memory until a pool is attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, coin_source: CoinApiHttpSource) -> Self {
        Self {
            bind_addr,
            coin_source: Arc::new(coin_source),
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Read by server tests for fixture access")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
