//! Port for favourite coin persistence.
//!
//! The [`FavoriteCoinRepository`] trait stores (user, coin) pairs. Each call
//! is a single atomic statement; uniqueness of a pair is enforced by storage
//! and reported back as [`FavoriteCoinRepositoryError::Conflict`].

use std::collections::{BTreeSet, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{CoinId, FavoriteAssociation, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by favourite coin repository adapters.
    pub enum FavoriteCoinRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "favourite coin repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "favourite coin repository query failed: {message}",
        /// The pair is already stored.
        Conflict { coin_id: String } =>
            "coin {coin_id} is already a favourite",
        /// No stored pair matched a delete.
        NotFound { coin_id: String } =>
            "coin {coin_id} is not a favourite",
    }
}

/// Port for favourite coin storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteCoinRepository: Send + Sync {
    /// All coin ids the user has favourited. Empty when there are none.
    async fn list_coin_ids(
        &self,
        user_id: &UserId,
    ) -> Result<BTreeSet<CoinId>, FavoriteCoinRepositoryError>;

    /// Look up a single association.
    async fn find(
        &self,
        user_id: &UserId,
        coin_id: &CoinId,
    ) -> Result<Option<FavoriteAssociation>, FavoriteCoinRepositoryError>;

    /// Store a new association.
    ///
    /// Returns [`FavoriteCoinRepositoryError::Conflict`] when the pair exists.
    async fn insert(
        &self,
        association: &FavoriteAssociation,
    ) -> Result<(), FavoriteCoinRepositoryError>;

    /// Remove an association.
    ///
    /// Returns [`FavoriteCoinRepositoryError::NotFound`] when nothing was
    /// deleted.
    async fn delete(
        &self,
        association: &FavoriteAssociation,
    ) -> Result<(), FavoriteCoinRepositoryError>;
}

/// In-memory implementation used when no database is configured.
///
/// State lives for the process lifetime only.
#[derive(Debug, Default)]
pub struct FixtureFavoriteCoinRepository {
    rows: Mutex<HashSet<FavoriteAssociation>>,
}

impl FixtureFavoriteCoinRepository {
    fn with_rows<T>(
        &self,
        f: impl FnOnce(&mut HashSet<FavoriteAssociation>) -> T,
    ) -> Result<T, FavoriteCoinRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| FavoriteCoinRepositoryError::connection("fixture store poisoned"))?;
        Ok(f(&mut rows))
    }
}

#[async_trait]
impl FavoriteCoinRepository for FixtureFavoriteCoinRepository {
    async fn list_coin_ids(
        &self,
        user_id: &UserId,
    ) -> Result<BTreeSet<CoinId>, FavoriteCoinRepositoryError> {
        self.with_rows(|rows| {
            rows.iter()
                .filter(|row| row.user_id() == user_id)
                .map(|row| row.coin_id().clone())
                .collect()
        })
    }

    async fn find(
        &self,
        user_id: &UserId,
        coin_id: &CoinId,
    ) -> Result<Option<FavoriteAssociation>, FavoriteCoinRepositoryError> {
        let probe = FavoriteAssociation::new(user_id.clone(), coin_id.clone());
        self.with_rows(|rows| rows.get(&probe).cloned())
    }

    async fn insert(
        &self,
        association: &FavoriteAssociation,
    ) -> Result<(), FavoriteCoinRepositoryError> {
        let inserted = self.with_rows(|rows| rows.insert(association.clone()))?;
        if inserted {
            Ok(())
        } else {
            Err(FavoriteCoinRepositoryError::conflict(
                association.coin_id().to_string(),
            ))
        }
    }

    async fn delete(
        &self,
        association: &FavoriteAssociation,
    ) -> Result<(), FavoriteCoinRepositoryError> {
        let removed = self.with_rows(|rows| rows.remove(association))?;
        if removed {
            Ok(())
        } else {
            Err(FavoriteCoinRepositoryError::not_found(
                association.coin_id().to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn association() -> FavoriteAssociation {
        FavoriteAssociation::new(
            UserId::random(),
            CoinId::new("bitcoin").expect("valid coin id"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_insert_then_find(association: FavoriteAssociation) {
        let repo = FixtureFavoriteCoinRepository::default();
        repo.insert(&association).await.expect("insert succeeds");

        let found = repo
            .find(association.user_id(), association.coin_id())
            .await
            .expect("find succeeds");
        assert_eq!(found, Some(association.clone()));

        let ids = repo
            .list_coin_ids(association.user_id())
            .await
            .expect("list succeeds");
        assert_eq!(ids.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_duplicate_insert_conflicts(association: FavoriteAssociation) {
        let repo = FixtureFavoriteCoinRepository::default();
        repo.insert(&association).await.expect("first insert succeeds");

        let err = repo
            .insert(&association)
            .await
            .expect_err("second insert must conflict");
        assert!(err.is_conflict());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_delete_of_missing_pair_is_not_found(association: FavoriteAssociation) {
        let repo = FixtureFavoriteCoinRepository::default();
        let err = repo
            .delete(&association)
            .await
            .expect_err("nothing to delete");
        assert!(err.is_not_found());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_lists_are_scoped_per_user(association: FavoriteAssociation) {
        let repo = FixtureFavoriteCoinRepository::default();
        repo.insert(&association).await.expect("insert succeeds");

        let other = repo
            .list_coin_ids(&UserId::random())
            .await
            .expect("list succeeds");
        assert!(other.is_empty());
    }
}
