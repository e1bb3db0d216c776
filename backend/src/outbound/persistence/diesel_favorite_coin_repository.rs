//! PostgreSQL-backed `FavoriteCoinRepository` implementation using Diesel ORM.
//!
//! Each operation is a single statement on one pooled connection. The
//! composite primary key on `favorite_coins` turns a duplicate insert into a
//! unique violation, reported as `Conflict`.

use std::collections::BTreeSet;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{FavoriteCoinRepository, FavoriteCoinRepositoryError};
use crate::domain::{CoinId, FavoriteAssociation, UserId};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{FavoriteCoinRow, NewFavoriteCoinRow};
use super::pool::{DbPool, PoolError};
use super::schema::favorite_coins;

/// Diesel-backed implementation of the `FavoriteCoinRepository` port.
#[derive(Clone)]
pub struct DieselFavoriteCoinRepository {
    pool: DbPool,
}

impl DieselFavoriteCoinRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FavoriteCoinRepositoryError {
    map_basic_pool_error(error, FavoriteCoinRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> FavoriteCoinRepositoryError {
    map_basic_diesel_error(
        error,
        FavoriteCoinRepositoryError::query,
        FavoriteCoinRepositoryError::connection,
    )
}

/// Rows written by other tools may hold ids this service would reject; skip
/// them rather than fail the whole listing.
fn row_to_coin_id(row: FavoriteCoinRow) -> Option<CoinId> {
    match CoinId::new(&row.coin_id) {
        Ok(id) => Some(id),
        Err(err) => {
            warn!(user_id = %row.user_id, coin_id = row.coin_id, %err, "skipping stored favourite");
            None
        }
    }
}

#[async_trait]
impl FavoriteCoinRepository for DieselFavoriteCoinRepository {
    async fn list_coin_ids(
        &self,
        user_id: &UserId,
    ) -> Result<BTreeSet<CoinId>, FavoriteCoinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FavoriteCoinRow> = favorite_coins::table
            .filter(favorite_coins::user_id.eq(user_id.as_uuid()))
            .select(FavoriteCoinRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().filter_map(row_to_coin_id).collect())
    }

    async fn find(
        &self,
        user_id: &UserId,
        coin_id: &CoinId,
    ) -> Result<Option<FavoriteAssociation>, FavoriteCoinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<FavoriteCoinRow> = favorite_coins::table
            .filter(favorite_coins::user_id.eq(user_id.as_uuid()))
            .filter(favorite_coins::coin_id.eq(coin_id.as_ref()))
            .select(FavoriteCoinRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|_| FavoriteAssociation::new(user_id.clone(), coin_id.clone())))
    }

    async fn insert(
        &self,
        association: &FavoriteAssociation,
    ) -> Result<(), FavoriteCoinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewFavoriteCoinRow {
            user_id: *association.user_id().as_uuid(),
            coin_id: association.coin_id().as_ref(),
        };

        match diesel::insert_into(favorite_coins::table)
            .values(&row)
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(FavoriteCoinRepositoryError::conflict(
                association.coin_id().to_string(),
            )),
            Err(err) => Err(map_diesel_error(err)),
        }
    }

    async fn delete(
        &self,
        association: &FavoriteAssociation,
    ) -> Result<(), FavoriteCoinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            favorite_coins::table
                .filter(favorite_coins::user_id.eq(association.user_id().as_uuid()))
                .filter(favorite_coins::coin_id.eq(association.coin_id().as_ref())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(FavoriteCoinRepositoryError::not_found(
                association.coin_id().to_string(),
            ));
        }
        Ok(())
    }
}
