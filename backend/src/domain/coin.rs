//! Coin catalogue entities.
//!
//! Catalogue entries are sourced entirely from the upstream coin API and never
//! persisted. Only [`CoinId`] values are stored, as favourite references.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum accepted length of a coin identifier, in characters.
pub const COIN_ID_MAX: usize = 128;

/// Validation errors returned by [`CoinId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoinIdValidationError {
    Empty,
    TooLong { max: usize },
}

impl fmt::Display for CoinIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "coin id must not be empty"),
            Self::TooLong { max } => write!(f, "coin id must be at most {max} characters"),
        }
    }
}

impl std::error::Error for CoinIdValidationError {}

/// Opaque upstream coin identifier such as `bitcoin`.
///
/// Identifiers are not checked against the catalogue; a favourite may refer
/// to a coin the upstream no longer lists.
///
/// # Examples
/// ```
/// use coinboard::domain::CoinId;
///
/// let id = CoinId::new("  bitcoin ").expect("valid id");
/// assert_eq!(id.as_ref(), "bitcoin");
/// assert!(CoinId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CoinId(String);

impl CoinId {
    /// Trim and validate a raw identifier.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CoinIdValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CoinIdValidationError::Empty);
        }
        if trimmed.chars().count() > COIN_ID_MAX {
            return Err(CoinIdValidationError::TooLong { max: COIN_ID_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CoinId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CoinId> for String {
    fn from(value: CoinId) -> Self {
        value.0
    }
}

impl TryFrom<String> for CoinId {
    type Error = CoinIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A single catalogue entry as reported by the coin API.
///
/// Supply figures are exact decimals; the upstream may omit them for coins
/// without a known supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinRecord {
    pub id: CoinId,
    pub rank: Option<i32>,
    pub symbol: String,
    pub name: String,
    pub supply: Option<Decimal>,
    pub max_supply: Option<Decimal>,
}

impl CoinRecord {
    /// Build a record with only the identifying fields populated.
    ///
    /// # Examples
    /// ```
    /// use coinboard::domain::{CoinId, CoinRecord};
    ///
    /// let coin = CoinRecord::new(CoinId::new("bitcoin").unwrap(), "BTC", "Bitcoin");
    /// assert!(coin.rank.is_none());
    /// ```
    pub fn new(id: CoinId, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            rank: None,
            symbol: symbol.into(),
            name: name.into(),
            supply: None,
            max_supply: None,
        }
    }

    /// Set the market-cap rank.
    pub fn with_rank(mut self, rank: i32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Set circulating and maximum supply.
    pub fn with_supply(mut self, supply: Option<Decimal>, max_supply: Option<Decimal>) -> Self {
        self.supply = supply;
        self.max_supply = max_supply;
        self
    }
}
