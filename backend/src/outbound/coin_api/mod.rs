//! Coin API outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `CoinSource` port.

mod dto;
mod http_source;

pub use http_source::{CoinApiConfigError, CoinApiHttpSource, DEFAULT_COIN_API_TIMEOUT};
