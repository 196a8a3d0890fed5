//! File-backed TokenStore.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::{SecretString, TokenStoreError};
use crate::ports::TokenStore;

/// Overwrites a single file with the latest refresh token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn save(&self, refresh_token: &SecretString) -> Result<(), TokenStoreError> {
        tokio::fs::write(&self.path, refresh_token.expose().as_bytes())
            .await
            .map_err(|source| TokenStoreError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_and_overwrites_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("Secret.txt"));

        store.save(&SecretString::new("first")).await.unwrap();
        store.save(&SecretString::new("second")).await.unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "second");
    }

    #[tokio::test]
    async fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nope").join("Secret.txt"));

        let err = store.save(&SecretString::new("tok")).await.unwrap_err();
        assert!(matches!(err, TokenStoreError::Io { .. }));
        assert!(err.to_string().contains("Secret.txt"));
    }
}
