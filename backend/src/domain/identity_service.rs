//! Caller authentication service.
//!
//! Resolves a bearer token to its subject and confirms the subject still has
//! a user record. Unknown tokens are `unauthorized`; a known token whose user
//! has gone is `not_found`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{IdentityQuery, IdentityResolver, UserDirectory};
use crate::domain::{BearerToken, Error, UserId};

/// Identity service implementing [`IdentityQuery`].
#[derive(Clone)]
pub struct IdentityService<T, U> {
    tokens: Arc<T>,
    users: Arc<U>,
}

impl<T, U> IdentityService<T, U> {
    pub fn new(tokens: Arc<T>, users: Arc<U>) -> Self {
        Self { tokens, users }
    }
}

#[async_trait]
impl<T, U> IdentityQuery for IdentityService<T, U>
where
    T: IdentityResolver,
    U: UserDirectory,
{
    async fn verify_token(&self, token: &BearerToken) -> Result<UserId, Error> {
        self.tokens
            .resolve(token)
            .await
            .map_err(|err| Error::internal(format!("identity lookup failed: {err}")))?
            .ok_or_else(|| Error::unauthorized("invalid or expired token"))
    }

    async fn confirm_user(&self, user_id: &UserId) -> Result<(), Error> {
        let exists = self
            .users
            .user_exists(user_id)
            .await
            .map_err(|err| Error::internal(format!("user lookup failed: {err}")))?;
        if !exists {
            debug!(%user_id, "token subject has no user record");
            return Err(Error::not_found("user not found"));
        }
        Ok(())
    }
}
