//! Builders wiring domain services onto database or fixture adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::warn;

use coinboard::domain::ports::{
    CoinSource, FavoriteCoinRepository, FavoriteCoinsCommand, FavoriteCoinsQuery,
    FixtureFavoriteCoinRepository, FixtureIdentityResolver, FixtureUserDirectory, IdentityQuery,
};
use coinboard::domain::{CoinCatalogueService, FavoriteCoinsService, IdentityService};
use coinboard::inbound::http::state::HttpState;
use coinboard::outbound::persistence::{
    DbPool, DieselFavoriteCoinRepository, DieselIdentityResolver, DieselUserDirectory,
};

use super::ServerConfig;

type FavoritePorts = (Arc<dyn FavoriteCoinsQuery>, Arc<dyn FavoriteCoinsCommand>);

/// Share one favourites service between its query and command ports.
fn favorite_ports<R, S>(favorites: Arc<R>, coins: Arc<S>) -> FavoritePorts
where
    R: FavoriteCoinRepository + 'static,
    S: CoinSource + 'static,
{
    let service = Arc::new(FavoriteCoinsService::new(favorites, coins));
    (service.clone(), service)
}

fn identity_port(pool: Option<&DbPool>) -> Arc<dyn IdentityQuery> {
    match pool {
        Some(pool) => Arc::new(IdentityService::new(
            Arc::new(DieselIdentityResolver::new(
                pool.clone(),
                Arc::new(DefaultClock),
            )),
            Arc::new(DieselUserDirectory::new(pool.clone())),
        )),
        None => Arc::new(IdentityService::new(
            Arc::new(FixtureIdentityResolver),
            Arc::new(FixtureUserDirectory),
        )),
    }
}

/// Build the handler state from the server configuration.
///
/// Without a pool the server accepts the fixture token only and keeps
/// favourites in process memory.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let coins = config.coin_source.clone();
    let catalogue = Arc::new(CoinCatalogueService::new(coins.clone()));
    let (favorites, favorites_command) = match &config.db_pool {
        Some(pool) => favorite_ports(
            Arc::new(DieselFavoriteCoinRepository::new(pool.clone())),
            coins,
        ),
        None => {
            warn!("no database configured; favourites are kept in memory");
            favorite_ports(Arc::new(FixtureFavoriteCoinRepository::default()), coins)
        }
    };

    web::Data::new(HttpState::new(
        identity_port(config.db_pool.as_ref()),
        catalogue,
        favorites,
        favorites_command,
    ))
}
