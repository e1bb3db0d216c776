//! Favourite coin associations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CoinId, UserId};

/// A persisted (user, coin) pair. At most one exists per pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FavoriteAssociation {
    user_id: UserId,
    coin_id: CoinId,
}

impl FavoriteAssociation {
    pub fn new(user_id: UserId, coin_id: CoinId) -> Self {
        Self { user_id, coin_id }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn coin_id(&self) -> &CoinId {
        &self.coin_id
    }
}

/// Result of toggling a favourite.
///
/// # Examples
/// ```
/// use coinboard::domain::FavoriteState;
///
/// assert_eq!(FavoriteState::Added.to_string(), "added");
/// assert_eq!(serde_json::to_string(&FavoriteState::Removed).unwrap(), "\"removed\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteState {
    Added,
    Removed,
}

impl fmt::Display for FavoriteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => f.write_str("added"),
            Self::Removed => f.write_str("removed"),
        }
    }
}
