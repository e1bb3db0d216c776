//! Tests for coin HTTP handlers.

use super::*;
use crate::domain::ports::{
    FIXTURE_TOKEN, FIXTURE_USER_ID, MockCoinCatalogueQuery, MockFavoriteCoinsCommand,
    MockFavoriteCoinsQuery, MockIdentityQuery,
};
use crate::domain::{CoinId, UserId};
use crate::inbound::http::test_utils::{StateBuilder, bearer};
use actix_web::http::StatusCode;
use actix_web::http::header::{AUTHORIZATION, CACHE_CONTROL};
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};

const PRIVATE_NO_CACHE: &str =
    crate::inbound::http::cache_control::PRIVATE_NO_CACHE_MUST_REVALIDATE;

fn bitcoin() -> CoinRecord {
    CoinRecord::new(CoinId::new("bitcoin").expect("valid id"), "BTC", "Bitcoin")
        .with_rank(1)
        .with_supply(Some(Decimal::new(197_000_005, 1)), Some(Decimal::from(21_000_000)))
}

fn ethereum() -> CoinRecord {
    CoinRecord::new(CoinId::new("ethereum").expect("valid id"), "ETH", "Ethereum").with_rank(2)
}

async fn send(
    builder: StateBuilder,
    request: actix_test::TestRequest,
) -> (StatusCode, Option<String>, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(builder.build()))
            .service(scope()),
    )
    .await;
    let res = actix_test::call_service(&app, request.to_request()).await;
    let status = res.status();
    let cache = res
        .headers()
        .get(CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = actix_test::read_body(res).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, cache, json)
}

fn authorised(request: actix_test::TestRequest) -> actix_test::TestRequest {
    request.insert_header((AUTHORIZATION, bearer(FIXTURE_TOKEN)))
}

fn fixture_user() -> UserId {
    UserId::from_uuid(FIXTURE_USER_ID)
}

#[actix_web::test]
async fn coins_render_supplies_as_numbers() {
    let mut catalogue = MockCoinCatalogueQuery::new();
    catalogue
        .expect_list_coins()
        .times(1)
        .return_once(|| Ok(vec![bitcoin(), ethereum()]));

    let (status, _, body) = send(
        StateBuilder::default().catalogue(catalogue),
        authorised(actix_test::TestRequest::get().uri("/api/Coin/Coins")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "id": "bitcoin",
                "rank": 1,
                "symbol": "BTC",
                "name": "Bitcoin",
                "supply": 19_700_000.5,
                "maxSupply": 21_000_000
            },
            {
                "id": "ethereum",
                "rank": 2,
                "symbol": "ETH",
                "name": "Ethereum",
                "supply": null,
                "maxSupply": null
            }
        ])
    );
}

#[actix_web::test]
async fn supplies_keep_every_digit() {
    let supply: Decimal = "19700000.123456789012345678".parse().expect("decimal literal");
    let mut catalogue = MockCoinCatalogueQuery::new();
    catalogue.expect_list_coins().times(1).return_once(move || {
        Ok(vec![
            CoinRecord::new(CoinId::new("bitcoin").expect("valid id"), "BTC", "Bitcoin")
                .with_supply(Some(supply), None),
        ])
    });

    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(StateBuilder::default().catalogue(catalogue).build()))
            .service(scope()),
    )
    .await;
    let body = actix_test::call_and_read_body(
        &app,
        authorised(actix_test::TestRequest::get().uri("/api/Coin/Coins")).to_request(),
    )
    .await;
    let text = std::str::from_utf8(&body).expect("UTF-8 body");

    assert!(text.contains(r#""supply":19700000.123456789012345678"#), "{text}");
    let decoded: Vec<CoinResponse> = serde_json::from_slice(&body).expect("decodes");
    assert_eq!(decoded[0].supply, Some(supply));
}

/// Identity port whose tokens resolve but whose user record is gone.
fn deleted_user() -> MockIdentityQuery {
    let mut identity = MockIdentityQuery::new();
    identity
        .expect_verify_token()
        .returning(|_| Ok(UserId::random()));
    identity
        .expect_confirm_user()
        .returning(|_| Err(Error::not_found("user not found")));
    identity
}

#[actix_web::test]
async fn catalogue_only_needs_a_valid_token() {
    let mut identity = MockIdentityQuery::new();
    identity
        .expect_verify_token()
        .times(1)
        .returning(|_| Ok(UserId::random()));
    identity.expect_confirm_user().never();
    let mut catalogue = MockCoinCatalogueQuery::new();
    catalogue
        .expect_list_coins()
        .times(1)
        .return_once(|| Ok(vec![ethereum()]));

    let (status, _, body) = send(
        StateBuilder::default().identity(identity).catalogue(catalogue),
        authorised(actix_test::TestRequest::get().uri("/api/Coin/Coins")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "ethereum");
}

#[rstest]
#[case("/api/Coin/SetFavoriteCoin", StatusCode::BAD_REQUEST)]
#[case("/api/Coin/SetFavoriteCoin?coinId=", StatusCode::BAD_REQUEST)]
#[case("/api/Coin/SetFavoriteCoin?coinId=bitcoin", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn coin_id_is_validated_before_the_user_check(
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let mut command = MockFavoriteCoinsCommand::new();
    command.expect_toggle_favorite().never();

    let (status, _, _) = send(
        StateBuilder::default()
            .identity(deleted_user())
            .favorites_command(command),
        authorised(actix_test::TestRequest::post().uri(uri)),
    )
    .await;

    assert_eq!(status, expected);
}

#[actix_web::test]
async fn favourites_of_deleted_users_are_not_found() {
    let mut favorites = MockFavoriteCoinsQuery::new();
    favorites.expect_favorite_coins().never();

    let (status, _, body) = send(
        StateBuilder::default()
            .identity(deleted_user())
            .favorites(favorites),
        authorised(actix_test::TestRequest::get().uri("/api/Coin/FavoriteCoins")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn catalogue_failures_are_redacted() {
    let mut catalogue = MockCoinCatalogueQuery::new();
    catalogue
        .expect_list_coins()
        .return_once(|| Err(Error::internal("failed to fetch coins: connection refused")));

    let (status, _, body) = send(
        StateBuilder::default().catalogue(catalogue),
        authorised(actix_test::TestRequest::get().uri("/api/Coin/Coins")),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/api/Coin/Coins"))]
#[case(actix_test::TestRequest::get().uri("/api/Coin/FavoriteCoins"))]
#[case(actix_test::TestRequest::post().uri("/api/Coin/SetFavoriteCoin?coinId=bitcoin"))]
#[actix_web::test]
async fn every_route_requires_a_token(#[case] request: actix_test::TestRequest) {
    let mut catalogue = MockCoinCatalogueQuery::new();
    catalogue.expect_list_coins().never();
    let mut favorites = MockFavoriteCoinsQuery::new();
    favorites.expect_favorite_coins().never();
    let mut command = MockFavoriteCoinsCommand::new();
    command.expect_toggle_favorite().never();

    let (status, _, body) = send(
        StateBuilder::default()
            .catalogue(catalogue)
            .favorites(favorites)
            .favorites_command(command),
        request,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "unauthorized");
}

#[actix_web::test]
async fn unknown_tokens_are_rejected() {
    let (status, _, _) = send(
        StateBuilder::default(),
        actix_test::TestRequest::get()
            .uri("/api/Coin/Coins")
            .insert_header((AUTHORIZATION, bearer("not-the-fixture"))),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn favourites_are_listed_for_the_caller() {
    let mut favorites = MockFavoriteCoinsQuery::new();
    favorites
        .expect_favorite_coins()
        .withf(|user_id| *user_id == fixture_user())
        .times(1)
        .return_once(|_| Ok(vec![ethereum()]));

    let (status, cache, body) = send(
        StateBuilder::default().favorites(favorites),
        authorised(actix_test::TestRequest::get().uri("/api/Coin/FavoriteCoins")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some(PRIVATE_NO_CACHE));
    let ids: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|coin| coin["id"].as_str())
        .collect();
    assert_eq!(ids, ["ethereum"]);
}

#[actix_web::test]
async fn toggling_reports_the_new_state() {
    let mut command = MockFavoriteCoinsCommand::new();
    command
        .expect_toggle_favorite()
        .withf(|user_id, coin_id| *user_id == fixture_user() && coin_id.as_ref() == "bitcoin")
        .times(1)
        .return_once(|_, _| Ok(FavoriteState::Removed));

    let (status, cache, body) = send(
        StateBuilder::default().favorites_command(command),
        authorised(actix_test::TestRequest::post().uri("/api/Coin/SetFavoriteCoin?coinId=%20bitcoin%20")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache.as_deref(), Some(PRIVATE_NO_CACHE));
    assert_eq!(body, json!({"coinId": "bitcoin", "state": "removed"}));
}

#[rstest]
#[case("/api/Coin/SetFavoriteCoin")]
#[case("/api/Coin/SetFavoriteCoin?coinId=")]
#[case("/api/Coin/SetFavoriteCoin?coinId=%20%20")]
#[case("/api/Coin/SetFavoriteCoin?other=bitcoin")]
#[actix_web::test]
async fn missing_coin_ids_are_rejected_without_mutation(#[case] uri: &str) {
    let mut command = MockFavoriteCoinsCommand::new();
    command.expect_toggle_favorite().never();

    let (status, _, body) = send(
        StateBuilder::default().favorites_command(command),
        authorised(actix_test::TestRequest::post().uri(uri)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"], json!({"field": "coinId", "code": "missing_field"}));
}

#[actix_web::test]
async fn overlong_coin_ids_are_rejected() {
    let mut command = MockFavoriteCoinsCommand::new();
    command.expect_toggle_favorite().never();
    let uri = format!(
        "/api/Coin/SetFavoriteCoin?coinId={}",
        "x".repeat(crate::domain::coin::COIN_ID_MAX + 1)
    );

    let (status, _, body) = send(
        StateBuilder::default().favorites_command(command),
        authorised(actix_test::TestRequest::post().uri(&uri)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "too_long");
}

#[actix_web::test]
async fn toggle_failures_surface_as_internal_errors() {
    let mut command = MockFavoriteCoinsCommand::new();
    command
        .expect_toggle_favorite()
        .return_once(|_, _| Err(Error::internal("favourite coin store error: timeout")));

    let (status, _, body) = send(
        StateBuilder::default().favorites_command(command),
        authorised(actix_test::TestRequest::post().uri("/api/Coin/SetFavoriteCoin?coinId=bitcoin")),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}
