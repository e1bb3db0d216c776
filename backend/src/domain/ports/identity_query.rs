//! Driving port authenticating callers.
//!
//! Inbound adapters parse credentials and hand them to [`IdentityQuery`];
//! they never consult the token store or user directory directly.

use async_trait::async_trait;

use crate::domain::{BearerToken, Error, UserId};

/// Use-case port turning a bearer token into a known user.
///
/// Token verification and the user check are separate so a route can
/// validate its input between them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityQuery: Send + Sync {
    /// Resolve the subject of a bearer token.
    ///
    /// # Errors
    ///
    /// - `unauthorized` when the token is unknown or expired.
    /// - `internal_error` when the token store fails.
    async fn verify_token(&self, token: &BearerToken) -> Result<UserId, Error>;

    /// Confirm a token subject still has a user record.
    ///
    /// # Errors
    ///
    /// - `not_found` when the user record is gone.
    /// - `internal_error` when the user directory fails.
    async fn confirm_user(&self, user_id: &UserId) -> Result<(), Error>;
}
