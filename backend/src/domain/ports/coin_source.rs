//! Driven port for fetching the coin catalogue from the upstream API.
//!
//! The domain owns the record shape; adapters own transport and wire-format
//! details and report failures through [`CoinSourceError`].

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{CoinId, CoinRecord};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the coin API.
    pub enum CoinSourceError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "coin api transport failed: {message}",
        /// The call exceeded the configured timeout.
        Timeout { message: String } =>
            "coin api timeout: {message}",
        /// The upstream answered with a non-success status.
        Status { status: u16, message: String } =>
            "coin api returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "coin api response decode failed: {message}",
    }
}

/// Port for retrieving the full coin catalogue.
///
/// Every call re-fetches; implementations must not cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoinSource: Send + Sync {
    /// Fetch the catalogue in upstream order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use coinboard::domain::ports::{CoinSource, FixtureCoinSource};
    ///
    /// let coins = FixtureCoinSource.fetch_coins().await?;
    /// assert_eq!(coins[0].id.as_ref(), "bitcoin");
    /// # Ok::<(), coinboard::domain::ports::CoinSourceError>(())
    /// ```
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>, CoinSourceError>;
}

/// Fixture implementation serving a small static catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCoinSource;

impl FixtureCoinSource {
    fn coin(id: &str, symbol: &str, name: &str, rank: i32) -> Result<CoinRecord, CoinSourceError> {
        let id = CoinId::new(id).map_err(|err| CoinSourceError::decode(err.to_string()))?;
        Ok(CoinRecord::new(id, symbol, name).with_rank(rank))
    }
}

#[async_trait]
impl CoinSource for FixtureCoinSource {
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>, CoinSourceError> {
        Ok(vec![
            Self::coin("bitcoin", "BTC", "Bitcoin", 1)?.with_supply(
                Some(Decimal::new(19_500_000, 0)),
                Some(Decimal::new(21_000_000, 0)),
            ),
            Self::coin("ethereum", "ETH", "Ethereum", 2)?
                .with_supply(Some(Decimal::new(120_000_000, 0)), None),
            Self::coin("dogecoin", "DOGE", "Dogecoin", 3)?,
        ])
    }
}
