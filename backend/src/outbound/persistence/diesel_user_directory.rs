//! PostgreSQL-backed `UserDirectory` implementation.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::UserId;
use crate::domain::ports::{UserDirectory, UserDirectoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed user existence checks.
#[derive(Clone)]
pub struct DieselUserDirectory {
    pool: DbPool,
}

impl DieselUserDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for DieselUserDirectory {
    async fn user_exists(&self, user_id: &UserId) -> Result<bool, UserDirectoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, UserDirectoryError::connection))?;

        diesel::select(exists(users::table.filter(users::id.eq(user_id.as_uuid()))))
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    UserDirectoryError::query,
                    UserDirectoryError::connection,
                )
            })
    }
}
