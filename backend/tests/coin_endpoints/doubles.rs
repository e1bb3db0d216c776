//! In-memory doubles for the driven ports.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use coinboard::domain::ports::{
    CoinSource, CoinSourceError, IdentityResolver, IdentityResolverError, UserDirectory,
    UserDirectoryError,
};
use coinboard::domain::{BearerToken, CoinId, CoinRecord, UserId};

/// Build a catalogue record with a rank.
pub fn coin(id: &str, symbol: &str, name: &str, rank: i32) -> CoinRecord {
    CoinRecord::new(CoinId::new(id).expect("valid coin id"), symbol, name).with_rank(rank)
}

/// Coin source replaying whatever response the test last configured.
pub struct ScriptedCoinSource {
    response: Mutex<Result<Vec<CoinRecord>, CoinSourceError>>,
    calls: Mutex<usize>,
}

impl ScriptedCoinSource {
    pub fn serving(coins: Vec<CoinRecord>) -> Self {
        Self {
            response: Mutex::new(Ok(coins)),
            calls: Mutex::new(0),
        }
    }

    pub fn serve(&self, coins: Vec<CoinRecord>) {
        *self.response.lock().expect("coin source poisoned") = Ok(coins);
    }

    pub fn fail_with(&self, error: CoinSourceError) {
        *self.response.lock().expect("coin source poisoned") = Err(error);
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("coin source poisoned")
    }
}

#[async_trait]
impl CoinSource for ScriptedCoinSource {
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>, CoinSourceError> {
        *self.calls.lock().expect("coin source poisoned") += 1;
        self.response.lock().expect("coin source poisoned").clone()
    }
}

/// Token table mapping raw tokens to subjects.
#[derive(Default)]
pub struct TokenTable {
    tokens: HashMap<String, UserId>,
}

impl TokenTable {
    pub fn with_token(mut self, token: &str, user_id: UserId) -> Self {
        self.tokens.insert(token.to_owned(), user_id);
        self
    }
}

#[async_trait]
impl IdentityResolver for TokenTable {
    async fn resolve(&self, token: &BearerToken) -> Result<Option<UserId>, IdentityResolverError> {
        Ok(self.tokens.get(token.expose()).cloned())
    }
}

/// Mutable set of existing users.
#[derive(Default)]
pub struct UserTable {
    users: Mutex<HashSet<UserId>>,
}

impl UserTable {
    pub fn with_user(self, user_id: UserId) -> Self {
        self.users.lock().expect("user table poisoned").insert(user_id);
        self
    }
}

#[async_trait]
impl UserDirectory for UserTable {
    async fn user_exists(&self, user_id: &UserId) -> Result<bool, UserDirectoryError> {
        Ok(self
            .users
            .lock()
            .expect("user table poisoned")
            .contains(user_id))
    }
}
