//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::IdentityService;
use crate::domain::ports::{
    CoinCatalogueQuery, FavoriteCoinsCommand, FavoriteCoinsQuery, FixtureCoinCatalogueQuery,
    FixtureFavoriteCoinsCommand, FixtureFavoriteCoinsQuery, FixtureIdentityResolver,
    FixtureUserDirectory, IdentityQuery,
};
use crate::inbound::http::state::HttpState;

/// Format an `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Assemble an [`HttpState`] where every port not overridden is a fixture.
///
/// The default identity port accepts the fixture token only.
#[derive(Default)]
pub struct StateBuilder {
    identity: Option<Arc<dyn IdentityQuery>>,
    catalogue: Option<Arc<dyn CoinCatalogueQuery>>,
    favorites: Option<Arc<dyn FavoriteCoinsQuery>>,
    favorites_command: Option<Arc<dyn FavoriteCoinsCommand>>,
}

impl StateBuilder {
    pub fn identity(mut self, port: impl IdentityQuery + 'static) -> Self {
        self.identity = Some(Arc::new(port));
        self
    }

    pub fn catalogue(mut self, port: impl CoinCatalogueQuery + 'static) -> Self {
        self.catalogue = Some(Arc::new(port));
        self
    }

    pub fn favorites(mut self, port: impl FavoriteCoinsQuery + 'static) -> Self {
        self.favorites = Some(Arc::new(port));
        self
    }

    pub fn favorites_command(mut self, port: impl FavoriteCoinsCommand + 'static) -> Self {
        self.favorites_command = Some(Arc::new(port));
        self
    }

    pub fn build(self) -> HttpState {
        let identity = self.identity.unwrap_or_else(|| {
            Arc::new(IdentityService::new(
                Arc::new(FixtureIdentityResolver),
                Arc::new(FixtureUserDirectory),
            ))
        });
        HttpState::new(
            identity,
            self.catalogue
                .unwrap_or_else(|| Arc::new(FixtureCoinCatalogueQuery)),
            self.favorites
                .unwrap_or_else(|| Arc::new(FixtureFavoriteCoinsQuery)),
            self.favorites_command
                .unwrap_or_else(|| Arc::new(FixtureFavoriteCoinsCommand)),
        )
    }
}
