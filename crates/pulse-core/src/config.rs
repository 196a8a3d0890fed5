//! Runner configuration and constants.

use std::time::Duration;

use url::Url;

// ============================================================================
// Fixed behavior
// ============================================================================

/// Rounds per process invocation.
pub const ROUNDS: u32 = 3;

/// Upper bound (inclusive) of entries dropped from the front of the shuffled
/// catalog.
pub const MAX_DROP: usize = 10;

// ============================================================================
// Environment
// ============================================================================

pub const ENV_REFRESH_TOKEN: &str = "REFRESH_TOKEN";
pub const ENV_CLIENT_ID: &str = "CONFIG_ID";
pub const ENV_CLIENT_SECRET: &str = "CONFIG_KEY";

// ============================================================================
// OAuth2
// ============================================================================

pub const DEFAULT_TOKEN_ENDPOINT: &str =
    "https://login.microsoftonline.com/common/oauth2/v2.0/token";

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:53682/";

/// Default file for the rotated refresh token when persistence is enabled.
pub const DEFAULT_REFRESH_TOKEN_FILE: &str = "Secret.txt";

/// How the access token is written into the `Authorization` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// `Authorization: <token>`
    Raw,
}

impl AuthScheme {
    pub fn header_value(self, token: &str) -> String {
        match self {
            AuthScheme::Bearer => format!("Bearer {token}"),
            AuthScheme::Raw => token.to_string(),
        }
    }
}

/// Immutable configuration handed to the runner at construction.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub token_endpoint: Url,
    pub redirect_uri: String,
    pub auth_scheme: AuthScheme,
    /// Per-request timeout. `None` means the client never gives up on a call.
    pub request_timeout: Option<Duration>,
}

impl RunnerConfig {
    pub fn with_token_endpoint(mut self, token_endpoint: Url) -> Self {
        self.token_endpoint = token_endpoint;
        self
    }

    pub fn with_auth_scheme(mut self, auth_scheme: AuthScheme) -> Self {
        self.auth_scheme = auth_scheme;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl Default for RunnerConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            token_endpoint: Url::parse(DEFAULT_TOKEN_ENDPOINT)
                .expect("default token endpoint is a valid URL"),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            auth_scheme: AuthScheme::default(),
            request_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_microsoft_common_endpoint() {
        let config = RunnerConfig::default();
        assert_eq!(config.token_endpoint.as_str(), DEFAULT_TOKEN_ENDPOINT);
        assert_eq!(config.redirect_uri, "http://localhost:53682/");
        assert_eq!(config.auth_scheme, AuthScheme::Bearer);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn header_value_per_scheme() {
        assert_eq!(AuthScheme::Bearer.header_value("abc"), "Bearer abc");
        assert_eq!(AuthScheme::Raw.header_value("abc"), "abc");
    }
}
