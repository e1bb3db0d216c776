//! Wires the real domain services and HTTP scope onto in-memory doubles.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, test, web};
use coinboard::Trace;
use coinboard::domain::ports::{FavoriteCoinRepository, FixtureFavoriteCoinRepository};
use coinboard::domain::{
    CoinCatalogueService, CoinRecord, FavoriteCoinsService, IdentityService, TRACE_ID_HEADER,
    UserId,
};
use coinboard::inbound::http::coins;
use coinboard::inbound::http::state::HttpState;
use serde_json::Value;

use super::coin_doubles::{ScriptedCoinSource, TokenTable, UserTable};

pub const ALICE_TOKEN: &str = "alice-token";
pub const GHOST_TOKEN: &str = "ghost-token";

/// Observed response.
pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

pub struct Harness {
    pub coins: Arc<ScriptedCoinSource>,
    pub favorites: Arc<FixtureFavoriteCoinRepository>,
    pub alice: UserId,
    state: web::Data<HttpState>,
}

impl Harness {
    /// Alice holds a live token; the ghost token belongs to a deleted user.
    pub fn new(catalogue: Vec<CoinRecord>) -> Self {
        let alice = UserId::random();
        let ghost = UserId::random();
        let coins = Arc::new(ScriptedCoinSource::serving(catalogue));
        let favorites = Arc::new(FixtureFavoriteCoinRepository::default());
        let tokens = TokenTable::default()
            .with_token(ALICE_TOKEN, alice.clone())
            .with_token(GHOST_TOKEN, ghost);
        let users = UserTable::default().with_user(alice.clone());

        let favourites_service = Arc::new(FavoriteCoinsService::new(
            favorites.clone(),
            coins.clone(),
        ));
        let state = HttpState::new(
            Arc::new(IdentityService::new(Arc::new(tokens), Arc::new(users))),
            Arc::new(CoinCatalogueService::new(coins.clone())),
            favourites_service.clone(),
            favourites_service,
        );

        Self {
            coins,
            favorites,
            alice,
            state: web::Data::new(state),
        }
    }

    pub async fn send(&self, request: test::TestRequest) -> Reply {
        let app = test::init_service(
            App::new()
                .app_data(self.state.clone())
                .wrap(Trace)
                .service(coins::scope()),
        )
        .await;
        let res = test::call_service(&app, request.to_request()).await;
        let status = res.status();
        let trace_id = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = test::read_body(res).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        Reply {
            status,
            trace_id,
            body,
        }
    }

    pub async fn get_as(&self, token: &str, uri: &str) -> Reply {
        self.send(
            test::TestRequest::get()
                .uri(uri)
                .insert_header((AUTHORIZATION, format!("Bearer {token}"))),
        )
        .await
    }

    pub async fn toggle_as(&self, token: &str, coin_id: &str) -> Reply {
        self.send(
            test::TestRequest::post()
                .uri(&format!("/api/Coin/SetFavoriteCoin?coinId={coin_id}"))
                .insert_header((AUTHORIZATION, format!("Bearer {token}"))),
        )
        .await
    }

    /// Ids returned by `FavoriteCoins` for Alice, in response order.
    pub async fn favourite_ids(&self) -> Vec<String> {
        let reply = self.get_as(ALICE_TOKEN, "/api/Coin/FavoriteCoins").await;
        assert_eq!(reply.status, StatusCode::OK, "favourites: {}", reply.body);
        ids(&reply.body)
    }

    /// Ids stored for Alice regardless of the catalogue.
    pub async fn stored_ids(&self) -> Vec<String> {
        self.favorites
            .list_coin_ids(&self.alice)
            .await
            .expect("in-memory store")
            .into_iter()
            .map(String::from)
            .collect()
    }
}

pub fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .filter_map(|coin| coin["id"].as_str().map(str::to_owned))
        .collect()
}
