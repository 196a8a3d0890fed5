//! TokenStore port - persistence of a rotated refresh token.
//!
//! The token endpoint may return a new `refresh_token` next to the access
//! token. Keeping it is an optional capability: the runner always calls the
//! store, and the default store does nothing.

use async_trait::async_trait;

use crate::domain::{SecretString, TokenStoreError};

#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Persist the rotated refresh token, replacing any previous one.
    async fn save(&self, refresh_token: &SecretString) -> Result<(), TokenStoreError>;
}

/// Discards rotated tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTokenStore;

#[async_trait]
impl TokenStore for NoopTokenStore {
    async fn save(&self, _refresh_token: &SecretString) -> Result<(), TokenStoreError> {
        Ok(())
    }
}
