//! Driven port checking whether a user record exists.

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user directory adapters.
    pub enum UserDirectoryError {
        /// Directory connection could not be established.
        Connection { message: String } =>
            "user directory connection failed: {message}",
        /// Lookup failed during execution.
        Query { message: String } =>
            "user directory query failed: {message}",
    }
}

/// Port for user existence checks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Whether a user row exists for the id.
    async fn user_exists(&self, user_id: &UserId) -> Result<bool, UserDirectoryError>;
}

/// Fixture directory reporting every user as present.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn user_exists(&self, _user_id: &UserId) -> Result<bool, UserDirectoryError> {
        Ok(true)
    }
}
