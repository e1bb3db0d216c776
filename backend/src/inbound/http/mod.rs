//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod coins;
pub mod error;
pub mod health;
pub mod identity;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
