//! Driven port resolving bearer tokens to user identities.
//!
//! Tokens are issued by another system; this service only looks them up.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BearerToken, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised while resolving a token.
    pub enum IdentityResolverError {
        /// Token store connection could not be established.
        Connection { message: String } =>
            "identity store connection failed: {message}",
        /// Lookup failed during execution.
        Query { message: String } =>
            "identity store query failed: {message}",
    }
}

/// Port mapping a presented token to the subject it was issued for.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Return the subject of a known, unexpired token, or `None`.
    async fn resolve(&self, token: &BearerToken) -> Result<Option<UserId>, IdentityResolverError>;
}

/// Development token accepted by [`FixtureIdentityResolver`].
pub const FIXTURE_TOKEN: &str = "dev-token";

/// Subject returned for [`FIXTURE_TOKEN`].
pub const FIXTURE_USER_ID: Uuid = Uuid::from_u128(0x3fa8_5f64_5717_4562_b3fc_2c96_3f66_afa6);

/// Fixture resolver used when no database is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureIdentityResolver;

#[async_trait]
impl IdentityResolver for FixtureIdentityResolver {
    async fn resolve(&self, token: &BearerToken) -> Result<Option<UserId>, IdentityResolverError> {
        Ok((token.expose() == FIXTURE_TOKEN).then(|| UserId::from_uuid(FIXTURE_USER_ID)))
    }
}
