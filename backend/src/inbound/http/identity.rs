//! Bearer-token identity extraction.
//!
//! [`AuthenticatedUser`] is the explicit context object handlers receive for
//! the caller. Extraction parses the `Authorization` header and asks the
//! identity port to resolve it, so a handler body only runs for known users.
//! [`AuthenticatedToken`] stops after token verification; handlers taking it
//! confirm the user themselves, or not at all.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::{BearerToken, Error, UserId};
use crate::inbound::http::state::HttpState;

/// The subject of a verified bearer token. The user record is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedToken(UserId);

impl AuthenticatedToken {
    pub fn subject(&self) -> &UserId {
        &self.0
    }
}

/// The resolved caller of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(UserId);

impl AuthenticatedUser {
    pub fn user_id(&self) -> &UserId {
        &self.0
    }
}

fn bearer_token(req: &HttpRequest) -> Result<BearerToken, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("missing bearer token"))?;
    let raw = header
        .to_str()
        .map_err(|_| Error::unauthorized("malformed authorization header"))?;
    BearerToken::from_authorization_header(raw).map_err(|err| {
        debug!(%err, "rejected authorization header");
        Error::unauthorized("malformed authorization header")
    })
}

fn http_state(req: &HttpRequest) -> Result<web::Data<HttpState>, Error> {
    req.app_data::<web::Data<HttpState>>()
        .cloned()
        .ok_or_else(|| Error::internal("HTTP state is not configured"))
}

impl FromRequest for AuthenticatedToken {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let state = http_state(req);
        Box::pin(async move {
            let state = state?;
            let subject = state.identity.verify_token(&token?).await?;
            Ok(Self(subject))
        })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let state = http_state(req);
        Box::pin(async move {
            let state = state?;
            let user_id = state.identity.verify_token(&token?).await?;
            state.identity.confirm_user(&user_id).await?;
            Ok(Self(user_id))
        })
    }
}
