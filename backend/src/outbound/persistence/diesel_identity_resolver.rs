//! PostgreSQL-backed `IdentityResolver` looking up hashed access tokens.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{IdentityResolver, IdentityResolverError};
use crate::domain::{BearerToken, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::AccessTokenRow;
use super::pool::DbPool;
use super::schema::access_tokens;

/// Diesel-backed token resolver.
///
/// Expiry is checked against the injected clock rather than the database
/// clock so tests can pin time.
#[derive(Clone)]
pub struct DieselIdentityResolver {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselIdentityResolver {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

/// The subject of `row` if it has not expired at `clock`'s current time.
fn live_subject(row: AccessTokenRow, clock: &dyn Clock) -> Option<UserId> {
    if row.expires_at <= clock.utc() {
        debug!(user_id = %row.user_id, "access token expired");
        return None;
    }
    Some(UserId::from_uuid(row.user_id))
}

#[async_trait]
impl IdentityResolver for DieselIdentityResolver {
    async fn resolve(&self, token: &BearerToken) -> Result<Option<UserId>, IdentityResolverError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, IdentityResolverError::connection))?;

        let row: Option<AccessTokenRow> = access_tokens::table
            .filter(access_tokens::token_hash.eq(token.digest_hex()))
            .select(AccessTokenRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    IdentityResolverError::query,
                    IdentityResolverError::connection,
                )
            })?;

        Ok(row.and_then(|row| live_subject(row, self.clock.as_ref())))
    }
}
