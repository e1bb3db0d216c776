//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the coin endpoints, the health probes, the domain
//! schema wrappers from [`crate::inbound::http::schemas`], and the bearer
//! token security scheme. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` exports it for external tooling.

use crate::inbound::http::coins::{CoinResponse, SetFavoriteCoinResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, FavoriteStateSchema};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the bearer-token security scheme.
pub const BEARER_SCHEME: &str = "BearerToken";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Opaque access token issued by the identity provider."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Coinboard API",
        description = "Coin catalogue and per-user favourite coins.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::coins::list_coins,
        crate::inbound::http::coins::list_favorite_coins,
        crate::inbound::http::coins::set_favorite_coin,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CoinResponse,
        SetFavoriteCoinResponse,
        ErrorSchema,
        ErrorCodeSchema,
        FavoriteStateSchema
    )),
    tags(
        (name = "coins", description = "Coin catalogue and favourites"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
