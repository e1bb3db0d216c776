//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the favourite store and identity ports backed
//! by PostgreSQL via `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: database failures map to each port's error enum.
//!
//! # Example
//!
//! ```ignore
//! use coinboard::outbound::persistence::{DbPool, DieselFavoriteCoinRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/coinboard")).await?;
//! let repo = DieselFavoriteCoinRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_favorite_coin_repository;
mod diesel_identity_resolver;
mod diesel_user_directory;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_favorite_coin_repository::DieselFavoriteCoinRepository;
pub use diesel_identity_resolver::DieselIdentityResolver;
pub use diesel_user_directory::DieselUserDirectory;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
