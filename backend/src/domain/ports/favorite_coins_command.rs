//! Driving port for favourite coin mutations.
//!
//! HTTP handlers call [`FavoriteCoinsCommand`] with an already-validated
//! [`CoinId`] and the caller's resolved identity.

use async_trait::async_trait;

use crate::domain::{CoinId, Error, FavoriteState, UserId};

/// Use-case port for toggling a favourite.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteCoinsCommand: Send + Sync {
    /// Add the coin when absent, remove it when present.
    ///
    /// Returns the resulting state.
    async fn toggle_favorite(
        &self,
        user_id: &UserId,
        coin_id: &CoinId,
    ) -> Result<FavoriteState, Error>;
}

/// Fixture command that always reports the coin as added.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFavoriteCoinsCommand;

#[async_trait]
impl FavoriteCoinsCommand for FixtureFavoriteCoinsCommand {
    async fn toggle_favorite(
        &self,
        _user_id: &UserId,
        _coin_id: &CoinId,
    ) -> Result<FavoriteState, Error> {
        Ok(FavoriteState::Added)
    }
}
