//! Outbound adapters implementing the domain's driven ports.

pub mod coin_api;
pub mod persistence;
