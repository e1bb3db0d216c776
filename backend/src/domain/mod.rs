//! Domain primitives, services, and ports.
//!
//! Purpose: define the strongly typed entities shared by the HTTP and
//! persistence adapters, plus the use-case services that implement the
//! favourite-coin behaviour. Types stay transport agnostic; adapters own all
//! framework and wire-format concerns.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `CoinRecord` / `CoinId`: catalogue entries sourced from the coin API.
//! - `FavoriteAssociation` / `FavoriteState`: persisted (user, coin) pairs.
//! - `UserId` / `BearerToken`: identity primitives.
//! - `FavoriteCoinsService`, `CoinCatalogueService`, `IdentityService`:
//!   driving-port implementations.

pub mod auth;
pub mod coin;
mod coin_catalogue_service;
pub mod error;
pub mod favorite;
mod favorite_coins_service;
mod identity_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{BearerToken, BearerTokenValidationError};
pub use self::coin::{CoinId, CoinIdValidationError, CoinRecord};
pub use self::coin_catalogue_service::CoinCatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::favorite::{FavoriteAssociation, FavoriteState};
pub use self::favorite_coins_service::FavoriteCoinsService;
pub use self::identity_service::IdentityService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserValidationError};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use coinboard::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found("missing"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
