//! Coin catalogue query service.

use std::sync::Arc;

use async_trait::async_trait;

use super::favorite_coins_service::map_coin_source_error;
use crate::domain::ports::{CoinCatalogueQuery, CoinSource};
use crate::domain::{CoinRecord, Error};

/// Passes the upstream catalogue through to inbound adapters.
#[derive(Clone)]
pub struct CoinCatalogueService<S> {
    coins: Arc<S>,
}

impl<S> CoinCatalogueService<S> {
    pub fn new(coins: Arc<S>) -> Self {
        Self { coins }
    }
}

#[async_trait]
impl<S> CoinCatalogueQuery for CoinCatalogueService<S>
where
    S: CoinSource,
{
    async fn list_coins(&self) -> Result<Vec<CoinRecord>, Error> {
        self.coins.fetch_coins().await.map_err(map_coin_source_error)
    }
}
