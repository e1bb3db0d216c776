//! Reqwest-backed coin API source adapter.
//!
//! This adapter owns transport details only: URL joining, timeout and HTTP
//! error mapping, and JSON decoding into domain coin records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::CoinEnvelopeDto;
use crate::domain::CoinRecord;
use crate::domain::ports::{CoinSource, CoinSourceError};

/// Default request timeout for catalogue fetches.
pub const DEFAULT_COIN_API_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_USER_AGENT: &str = concat!("coinboard/", env!("CARGO_PKG_VERSION"));

/// Errors raised while building the adapter from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CoinApiConfigError {
    #[error("coin api base url must not be empty")]
    EmptyBaseUrl,
    #[error("coins endpoint path must not be empty")]
    EmptyEndpoint,
    #[error("coin api url {url:?} is invalid: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build coin api client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Coin source adapter issuing one GET per fetch against a fixed URL.
pub struct CoinApiHttpSource {
    client: Client,
    endpoint: Url,
}

impl CoinApiHttpSource {
    /// Build an adapter for `base_url` joined with `endpoint_path`.
    ///
    /// Exactly one `/` separates the two parts regardless of how either side
    /// is written.
    /// ```rust,ignore
    /// let source = CoinApiHttpSource::new("https://api.coincap.io", "/v2/assets", timeout)?;
    /// assert_eq!(source.endpoint().as_str(), "https://api.coincap.io/v2/assets");
    /// ```
    /// # Errors
    ///
    /// Returns an error for blank or unparsable inputs, or when the reqwest
    /// client cannot be constructed.
    pub fn new(
        base_url: &str,
        endpoint_path: &str,
        timeout: Duration,
    ) -> Result<Self, CoinApiConfigError> {
        let endpoint = join_endpoint(base_url, endpoint_path)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Fully joined catalogue URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CoinSource for CoinApiHttpSource {
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>, CoinSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_coins(body.as_ref())
    }
}

fn join_endpoint(base_url: &str, endpoint_path: &str) -> Result<Url, CoinApiConfigError> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(CoinApiConfigError::EmptyBaseUrl);
    }
    let path = endpoint_path.trim().trim_start_matches('/');
    if path.is_empty() {
        return Err(CoinApiConfigError::EmptyEndpoint);
    }

    let joined = format!("{base}/{path}");
    Url::parse(&joined).map_err(|source| CoinApiConfigError::InvalidUrl {
        url: joined,
        source,
    })
}

fn parse_coins(body: &[u8]) -> Result<Vec<CoinRecord>, CoinSourceError> {
    let decoded: CoinEnvelopeDto = serde_json::from_slice(body).map_err(|error| {
        CoinSourceError::decode(format!("invalid coin api JSON payload: {error}"))
    })?;
    let timestamp = decoded.timestamp;
    let coins = decoded
        .into_domain_coins()
        .map_err(CoinSourceError::decode)?;
    debug!(count = coins.len(), ?timestamp, "coin catalogue fetched");
    Ok(coins)
}

fn map_transport_error(error: reqwest::Error) -> CoinSourceError {
    if error.is_timeout() {
        CoinSourceError::timeout(error.to_string())
    } else {
        CoinSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CoinSourceError {
    let preview = body_preview(body);
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CoinSourceError::timeout(format!("status {}: {preview}", status.as_u16()))
        }
        _ => CoinSourceError::status(status.as_u16(), preview),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.is_empty() {
        return "<empty body>".to_owned();
    }
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
#[path = "http_source_tests.rs"]
mod tests;
