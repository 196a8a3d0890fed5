//! Credentials read from the process environment at startup.

use super::errors::ConfigError;
use super::secret::SecretString;
use crate::config::{ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_REFRESH_TOKEN};

/// The three secrets needed for the refresh-token grant.
///
/// Immutable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub refresh_token: SecretString,
    pub client_id: SecretString,
    pub client_secret: SecretString,
}

impl Credentials {
    pub fn new(
        refresh_token: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            refresh_token: SecretString::new(refresh_token),
            client_id: SecretString::new(client_id),
            client_secret: SecretString::new(client_secret),
        }
    }

    /// Read `REFRESH_TOKEN`, `CONFIG_ID` and `CONFIG_KEY` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    ///
    /// Variables are checked in order; the first missing or empty one is
    /// reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<SecretString, ConfigError> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(SecretString::new(value)),
                _ => Err(ConfigError::MissingVariable(name)),
            }
        };

        Ok(Self {
            refresh_token: require(ENV_REFRESH_TOKEN)?,
            client_id: require(ENV_CLIENT_ID)?,
            client_secret: require(ENV_CLIENT_SECRET)?,
        })
    }
}
