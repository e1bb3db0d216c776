//! Shared validation helpers for inbound HTTP adapters.
//!
//! Validation failures become `invalid_request` errors whose details carry
//! the offending field and a stable machine-readable code.

use serde_json::json;

use crate::domain::{CoinId, CoinIdValidationError, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    TooLong,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::TooLong => "too_long",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn validation_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Parse an optional raw value into a [`CoinId`], treating absent and blank
/// values alike.
pub(crate) fn parse_coin_id(value: Option<&str>, field: FieldName) -> Result<CoinId, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    CoinId::new(raw).map_err(|err| match err {
        CoinIdValidationError::Empty => missing_field_error(field),
        CoinIdValidationError::TooLong { .. } => {
            validation_error(field, ValidationCode::TooLong, format!("{}: {err}", field.as_str()))
        }
    })
}
