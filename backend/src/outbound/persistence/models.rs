//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{access_tokens, favorite_coins};

/// Row struct for reading unexpired token subjects.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = access_tokens)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccessTokenRow {
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// Row struct for reading favourite coin associations.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = favorite_coins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavoriteCoinRow {
    pub user_id: Uuid,
    pub coin_id: String,
}

/// Insertable struct for new favourite coin associations.
///
/// `created_at` is filled by the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favorite_coins)]
pub(crate) struct NewFavoriteCoinRow<'a> {
    pub user_id: Uuid,
    pub coin_id: &'a str,
}
