//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `migrations/`. When the
//! schema changes, regenerate with `diesel print-schema` or update by hand.

diesel::table! {
    /// Users known to the identity system.
    users (id) {
        id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Issued bearer tokens, keyed by SHA-256 hex digest.
    access_tokens (token_hash) {
        #[max_length = 64]
        token_hash -> Varchar,
        user_id -> Uuid,
        expires_at -> Timestamptz,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Favourite coin associations; one row per (user, coin) pair.
    favorite_coins (user_id, coin_id) {
        user_id -> Uuid,
        #[max_length = 128]
        coin_id -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(favorite_coins -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(access_tokens, favorite_coins, users);
