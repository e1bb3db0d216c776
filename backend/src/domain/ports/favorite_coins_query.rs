//! Driving port for reading a user's favourite coins.

use async_trait::async_trait;

use crate::domain::{CoinRecord, Error, UserId};

/// Use-case port returning catalogue records the user has favourited.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteCoinsQuery: Send + Sync {
    /// Favourited coins in catalogue order.
    ///
    /// Fails as a whole when the catalogue cannot be fetched.
    async fn favorite_coins(&self, user_id: &UserId) -> Result<Vec<CoinRecord>, Error>;
}

/// Fixture query returning no favourites.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFavoriteCoinsQuery;

#[async_trait]
impl FavoriteCoinsQuery for FixtureFavoriteCoinsQuery {
    async fn favorite_coins(&self, _user_id: &UserId) -> Result<Vec<CoinRecord>, Error> {
        Ok(Vec::new())
    }
}
