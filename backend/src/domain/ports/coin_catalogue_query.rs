//! Driving port for listing the coin catalogue.

use async_trait::async_trait;

use crate::domain::{CoinRecord, Error};

/// Use-case port backing the catalogue listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoinCatalogueQuery: Send + Sync {
    /// The full catalogue in upstream order.
    async fn list_coins(&self) -> Result<Vec<CoinRecord>, Error>;
}

/// Fixture query returning an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCoinCatalogueQuery;

#[async_trait]
impl CoinCatalogueQuery for FixtureCoinCatalogueQuery {
    async fn list_coins(&self) -> Result<Vec<CoinRecord>, Error> {
        Ok(Vec::new())
    }
}
