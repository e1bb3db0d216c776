//! Authentication primitives such as bearer tokens.
//!
//! Inbound adapters parse the `Authorization` header into a [`BearerToken`]
//! before any port is consulted. Token material stays in zeroising memory and
//! only its digest leaves this module.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Domain error returned when an authorization header cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerTokenValidationError {
    /// The header did not use the `Bearer` scheme.
    WrongScheme,
    /// The token was blank.
    EmptyToken,
}

impl fmt::Display for BearerTokenValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongScheme => write!(f, "authorization scheme must be Bearer"),
            Self::EmptyToken => write!(f, "bearer token must not be empty"),
        }
    }
}

impl std::error::Error for BearerTokenValidationError {}

/// Opaque access token presented by a caller.
///
/// ## Invariants
/// - The token is non-empty and carries no surrounding whitespace.
/// - `Debug` output never reveals the secret.
///
/// # Examples
/// ```
/// use coinboard::domain::BearerToken;
///
/// let token = BearerToken::from_authorization_header("Bearer abc123").unwrap();
/// assert_eq!(token.expose(), "abc123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Construct a token from its raw value.
    pub fn new(raw: &str) -> Result<Self, BearerTokenValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BearerTokenValidationError::EmptyToken);
        }
        Ok(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Parse an `Authorization` header value. The scheme is matched
    /// case-insensitively.
    pub fn from_authorization_header(value: &str) -> Result<Self, BearerTokenValidationError> {
        let (scheme, rest) = value
            .trim_start()
            .split_once(' ')
            .ok_or(BearerTokenValidationError::WrongScheme)?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(BearerTokenValidationError::WrongScheme);
        }
        Self::new(rest)
    }

    /// Raw secret for comparison against development fixtures.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Lowercase hex SHA-256 digest used for persisted lookups.
    pub fn digest_hex(&self) -> String {
        hex::encode(Sha256::digest(self.0.as_bytes()))
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}
