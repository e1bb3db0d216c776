//! DTOs for decoding coin API JSON responses.
//!
//! The upstream envelope is `{ "data": [...], "timestamp": ... }`. Numeric
//! fields arrive either as JSON numbers or as decimal strings, so both forms
//! are accepted before mapping into [`CoinRecord`] values in one pass.
//! Entries whose id cannot be used are logged and dropped.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{CoinId, CoinRecord};

#[derive(Debug, Deserialize)]
pub(super) struct CoinEnvelopeDto {
    pub(super) data: Vec<CoinDto>,
    #[serde(default)]
    pub(super) timestamp: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CoinDto {
    pub(super) id: String,
    #[serde(default)]
    pub(super) rank: Option<Decimal>,
    pub(super) symbol: String,
    pub(super) name: String,
    #[serde(default)]
    pub(super) supply: Option<Decimal>,
    #[serde(default)]
    pub(super) max_supply: Option<Decimal>,
}

fn rank_from_decimal(coin: &str, rank: Decimal) -> Result<i32, String> {
    if !rank.fract().is_zero() {
        return Err(format!("coin {coin} has fractional rank {rank}"));
    }
    rank.to_i32()
        .ok_or_else(|| format!("coin {coin} rank {rank} out of range"))
}

impl CoinEnvelopeDto {
    /// Map every entry into a record, skipping those whose id is unusable.
    pub(super) fn into_domain_coins(self) -> Result<Vec<CoinRecord>, String> {
        let mut coins = Vec::with_capacity(self.data.len());
        for dto in self.data {
            if let Some(coin) = dto.into_domain_coin()? {
                coins.push(coin);
            }
        }
        Ok(coins)
    }
}

impl CoinDto {
    fn into_domain_coin(self) -> Result<Option<CoinRecord>, String> {
        let id = match CoinId::new(&self.id) {
            Ok(id) => id,
            Err(err) => {
                warn!(coin_id = self.id, %err, "skipping catalogue entry");
                return Ok(None);
            }
        };
        let rank = self
            .rank
            .map(|rank| rank_from_decimal(id.as_ref(), rank))
            .transpose()?;

        Ok(Some(CoinRecord {
            id,
            rank,
            symbol: self.symbol,
            name: self.name,
            supply: self.supply,
            max_supply: self.max_supply,
        }))
    }
}
