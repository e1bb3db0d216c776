//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`CoinSource`, `FavoriteCoinRepository`, `IdentityResolver`,
//! `UserDirectory`) are implemented by outbound adapters. Driving ports
//! (`CoinCatalogueQuery`, `FavoriteCoinsQuery`, `FavoriteCoinsCommand`,
//! `IdentityQuery`) are implemented by domain services and consumed by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod coin_catalogue_query;
mod coin_source;
mod favorite_coin_repository;
mod favorite_coins_command;
mod favorite_coins_query;
mod identity_query;
mod identity_resolver;
mod user_directory;

#[cfg(test)]
pub use coin_catalogue_query::MockCoinCatalogueQuery;
pub use coin_catalogue_query::{CoinCatalogueQuery, FixtureCoinCatalogueQuery};
#[cfg(test)]
pub use coin_source::MockCoinSource;
pub use coin_source::{CoinSource, CoinSourceError, FixtureCoinSource};
#[cfg(test)]
pub use favorite_coin_repository::MockFavoriteCoinRepository;
pub use favorite_coin_repository::{
    FavoriteCoinRepository, FavoriteCoinRepositoryError, FixtureFavoriteCoinRepository,
};
#[cfg(test)]
pub use favorite_coins_command::MockFavoriteCoinsCommand;
pub use favorite_coins_command::{FavoriteCoinsCommand, FixtureFavoriteCoinsCommand};
#[cfg(test)]
pub use favorite_coins_query::MockFavoriteCoinsQuery;
pub use favorite_coins_query::{FavoriteCoinsQuery, FixtureFavoriteCoinsQuery};
pub use identity_query::IdentityQuery;
#[cfg(test)]
pub use identity_query::MockIdentityQuery;
#[cfg(test)]
pub use identity_resolver::MockIdentityResolver;
pub use identity_resolver::{
    FIXTURE_TOKEN, FIXTURE_USER_ID, FixtureIdentityResolver, IdentityResolver,
    IdentityResolverError,
};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory, UserDirectoryError};
