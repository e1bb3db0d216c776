//! Favourite coin domain service.
//!
//! Implements the toggle command and the favourites query on top of the
//! favourite store and the coin source. The composite key on the store makes
//! concurrent toggles safe: a lost race surfaces as `Conflict` or `NotFound`
//! and is reported as the state the caller asked for.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    CoinSource, CoinSourceError, FavoriteCoinRepository, FavoriteCoinRepositoryError,
    FavoriteCoinsCommand, FavoriteCoinsQuery,
};
use crate::domain::{CoinId, CoinRecord, Error, FavoriteAssociation, FavoriteState, UserId};

/// Favourite coin service implementing the driving ports.
#[derive(Clone)]
pub struct FavoriteCoinsService<R, S> {
    favorites: Arc<R>,
    coins: Arc<S>,
}

impl<R, S> FavoriteCoinsService<R, S> {
    /// Create a new service over the favourite store and coin source.
    pub fn new(favorites: Arc<R>, coins: Arc<S>) -> Self {
        Self { favorites, coins }
    }
}

pub(crate) fn map_coin_source_error(error: CoinSourceError) -> Error {
    Error::internal(format!("failed to fetch coins: {error}"))
}

fn map_repository_error(error: FavoriteCoinRepositoryError) -> Error {
    Error::internal(format!("favourite coin store error: {error}"))
}

impl<R, S> FavoriteCoinsService<R, S>
where
    R: FavoriteCoinRepository,
{
    async fn add(&self, association: &FavoriteAssociation) -> Result<FavoriteState, Error> {
        match self.favorites.insert(association).await {
            Ok(()) => Ok(FavoriteState::Added),
            Err(err) if err.is_conflict() => {
                debug!(coin_id = %association.coin_id(), "favourite already present");
                Ok(FavoriteState::Added)
            }
            Err(err) => Err(map_repository_error(err)),
        }
    }

    async fn remove(&self, association: &FavoriteAssociation) -> Result<FavoriteState, Error> {
        match self.favorites.delete(association).await {
            Ok(()) => Ok(FavoriteState::Removed),
            Err(err) if err.is_not_found() => {
                debug!(coin_id = %association.coin_id(), "favourite already removed");
                Ok(FavoriteState::Removed)
            }
            Err(err) => Err(map_repository_error(err)),
        }
    }
}

#[async_trait]
impl<R, S> FavoriteCoinsCommand for FavoriteCoinsService<R, S>
where
    R: FavoriteCoinRepository,
    S: CoinSource,
{
    async fn toggle_favorite(
        &self,
        user_id: &UserId,
        coin_id: &CoinId,
    ) -> Result<FavoriteState, Error> {
        let existing = self
            .favorites
            .find(user_id, coin_id)
            .await
            .map_err(map_repository_error)?;

        let state = match existing {
            Some(association) => self.remove(&association).await?,
            None => {
                let association = FavoriteAssociation::new(user_id.clone(), coin_id.clone());
                self.add(&association).await?
            }
        };

        info!(%user_id, %coin_id, %state, "favourite coin toggled");
        Ok(state)
    }
}

#[async_trait]
impl<R, S> FavoriteCoinsQuery for FavoriteCoinsService<R, S>
where
    R: FavoriteCoinRepository,
    S: CoinSource,
{
    async fn favorite_coins(&self, user_id: &UserId) -> Result<Vec<CoinRecord>, Error> {
        let ids = self
            .favorites
            .list_coin_ids(user_id)
            .await
            .map_err(map_repository_error)?;
        let catalogue = self
            .coins
            .fetch_coins()
            .await
            .map_err(map_coin_source_error)?;

        let favourites: Vec<CoinRecord> = catalogue
            .into_iter()
            .filter(|coin| ids.contains(&coin.id))
            .collect();

        let missing = ids.len().saturating_sub(favourites.len());
        if missing > 0 {
            debug!(%user_id, missing, "favourite coins absent from catalogue");
        }
        Ok(favourites)
    }
}

#[cfg(test)]
#[path = "favorite_coins_service_tests.rs"]
mod tests;
