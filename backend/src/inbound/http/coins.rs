//! Coin catalogue and favourite coin HTTP handlers.
//!
//! ```text
//! GET  /api/Coin/Coins
//! GET  /api/Coin/FavoriteCoins
//! POST /api/Coin/SetFavoriteCoin?coinId=bitcoin
//! ```
//!
//! Every route requires a bearer token. The catalogue only verifies the
//! token; the favourite routes also confirm the caller still exists.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CoinRecord, Error, FavoriteState};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::identity::{AuthenticatedToken, AuthenticatedUser};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_coin_id};

const COIN_ID_FIELD: FieldName = FieldName::new("coinId");

/// A catalogue entry as returned to clients.
///
/// Supplies are rendered as exact JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoinResponse {
    #[schema(example = "bitcoin")]
    pub id: String,
    #[schema(example = 1)]
    pub rank: Option<i32>,
    #[schema(example = "BTC")]
    pub symbol: String,
    #[schema(example = "Bitcoin")]
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    #[schema(value_type = Option<f64>, example = 19_700_000.0)]
    pub supply: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    #[schema(value_type = Option<f64>, example = 21_000_000.0)]
    pub max_supply: Option<Decimal>,
}

impl From<CoinRecord> for CoinResponse {
    fn from(value: CoinRecord) -> Self {
        Self {
            id: value.id.into(),
            rank: value.rank,
            symbol: value.symbol,
            name: value.name,
            supply: value.supply,
            max_supply: value.max_supply,
        }
    }
}

/// Query string accepted by `POST /api/Coin/SetFavoriteCoin`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SetFavoriteCoinQuery {
    /// Identifier of the coin to toggle.
    #[serde(rename = "coinId")]
    #[param(example = "bitcoin")]
    pub coin_id: Option<String>,
}

/// Outcome of a favourite toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetFavoriteCoinResponse {
    #[schema(example = "bitcoin")]
    pub coin_id: String,
    #[schema(value_type = crate::inbound::http::schemas::FavoriteStateSchema)]
    pub state: FavoriteState,
}

fn into_responses(coins: Vec<CoinRecord>) -> Vec<CoinResponse> {
    coins.into_iter().map(CoinResponse::from).collect()
}

/// Route all coin handlers under `/api/Coin`.
///
/// Query strings that cannot be decoded are reported with the standard
/// error payload.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use coinboard::inbound::http::coins;
///
/// let app = App::new().service(coins::scope());
/// ```
pub fn scope() -> actix_web::Scope {
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req: &HttpRequest| Error::invalid_request(err.to_string()).into());
    web::scope("/api/Coin")
        .app_data(query_config)
        .service(list_coins)
        .service(list_favorite_coins)
        .service(set_favorite_coin)
}

/// List the full coin catalogue in upstream order.
#[utoipa::path(
    get,
    path = "/api/Coin/Coins",
    responses(
        (status = 200, description = "Coin catalogue", body = [CoinResponse]),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorSchema),
        (status = 500, description = "Catalogue unavailable", body = ErrorSchema)
    ),
    tags = ["coins"],
    operation_id = "listCoins"
)]
#[get("/Coins")]
pub async fn list_coins(
    state: web::Data<HttpState>,
    _caller: AuthenticatedToken,
) -> ApiResult<web::Json<Vec<CoinResponse>>> {
    let coins = state.catalogue.list_coins().await?;
    Ok(web::Json(into_responses(coins)))
}

/// List the caller's favourite coins, ordered as in the catalogue.
#[utoipa::path(
    get,
    path = "/api/Coin/FavoriteCoins",
    responses(
        (status = 200, description = "Favourite coins", body = [CoinResponse]),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorSchema),
        (status = 404, description = "Caller no longer exists", body = ErrorSchema),
        (status = 500, description = "Catalogue or favourites unavailable", body = ErrorSchema)
    ),
    tags = ["coins"],
    operation_id = "listFavoriteCoins"
)]
#[get("/FavoriteCoins")]
pub async fn list_favorite_coins(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
) -> ApiResult<HttpResponse> {
    let coins = state.favorites.favorite_coins(user.user_id()).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(into_responses(coins)))
}

/// Toggle a coin in the caller's favourites.
///
/// The coin is added when absent and removed when present. Calling twice
/// restores the original set. `coinId` is validated before the caller's
/// user record is checked.
#[utoipa::path(
    post,
    path = "/api/Coin/SetFavoriteCoin",
    params(SetFavoriteCoinQuery),
    responses(
        (status = 200, description = "Favourite toggled", body = SetFavoriteCoinResponse),
        (status = 400, description = "Missing or invalid coinId", body = ErrorSchema),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorSchema),
        (status = 404, description = "Caller no longer exists", body = ErrorSchema),
        (status = 500, description = "Favourites unavailable", body = ErrorSchema)
    ),
    tags = ["coins"],
    operation_id = "setFavoriteCoin"
)]
#[post("/SetFavoriteCoin")]
pub async fn set_favorite_coin(
    state: web::Data<HttpState>,
    caller: AuthenticatedToken,
    query: web::Query<SetFavoriteCoinQuery>,
) -> ApiResult<HttpResponse> {
    let coin_id = parse_coin_id(query.coin_id.as_deref(), COIN_ID_FIELD)?;
    let user_id = caller.subject();
    state.identity.confirm_user(user_id).await?;
    let outcome = state
        .favorites_command
        .toggle_favorite(user_id, &coin_id)
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(SetFavoriteCoinResponse {
            coin_id: coin_id.into(),
            state: outcome,
        }))
}

#[cfg(test)]
#[path = "coins_tests.rs"]
mod tests;
