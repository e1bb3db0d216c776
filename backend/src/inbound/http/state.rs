//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CoinCatalogueQuery, FavoriteCoinsCommand, FavoriteCoinsQuery, IdentityQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub identity: Arc<dyn IdentityQuery>,
    pub catalogue: Arc<dyn CoinCatalogueQuery>,
    pub favorites: Arc<dyn FavoriteCoinsQuery>,
    pub favorites_command: Arc<dyn FavoriteCoinsCommand>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use coinboard::domain::IdentityService;
    /// use coinboard::domain::ports::{
    ///     FixtureCoinCatalogueQuery, FixtureFavoriteCoinsCommand, FixtureFavoriteCoinsQuery,
    ///     FixtureIdentityResolver, FixtureUserDirectory,
    /// };
    /// use coinboard::inbound::http::state::HttpState;
    ///
    /// let identity = IdentityService::new(
    ///     Arc::new(FixtureIdentityResolver),
    ///     Arc::new(FixtureUserDirectory),
    /// );
    /// let state = HttpState::new(
    ///     Arc::new(identity),
    ///     Arc::new(FixtureCoinCatalogueQuery),
    ///     Arc::new(FixtureFavoriteCoinsQuery),
    ///     Arc::new(FixtureFavoriteCoinsCommand),
    /// );
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn new(
        identity: Arc<dyn IdentityQuery>,
        catalogue: Arc<dyn CoinCatalogueQuery>,
        favorites: Arc<dyn FavoriteCoinsQuery>,
        favorites_command: Arc<dyn FavoriteCoinsCommand>,
    ) -> Self {
        Self {
            identity,
            catalogue,
            favorites,
            favorites_command,
        }
    }
}
