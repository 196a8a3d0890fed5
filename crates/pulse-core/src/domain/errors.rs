//! Errors and their recovery scope.
//!
//! - [`ConfigError`]: fatal, raised before any network activity.
//! - [`AuthError`]: aborts the current round only.
//! - [`TokenStoreError`]: logged, never fails a round.
//!
//! Per-call failures are not errors at all; they are
//! [`CallResult`](super::outcome::CallResult) values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is missing or empty")]
    MissingVariable(&'static str),
}

/// The token endpoint did not hand out an access token.
///
/// Body-carrying variants keep the raw response for diagnostics. Token
/// endpoints do not echo secrets back in error bodies.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token response has no access_token: {body}")]
    MissingAccessToken { body: String },

    #[error("token response is not valid JSON: {body}")]
    InvalidResponse { body: String },

    #[error("token request failed: {0}")]
    Transport(String),
}

impl AuthError {
    /// Raw response body, when one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            AuthError::MissingAccessToken { body } | AuthError::InvalidResponse { body } => {
                Some(body.as_str())
            }
            AuthError::Transport(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("failed to write refresh token to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_variable() {
        let e = ConfigError::MissingVariable("CONFIG_KEY");
        assert_eq!(
            e.to_string(),
            "required environment variable CONFIG_KEY is missing or empty"
        );
    }

    #[test]
    fn auth_error_carries_body() {
        let e = AuthError::MissingAccessToken {
            body: r#"{"error":"invalid_grant"}"#.to_string(),
        };
        assert_eq!(e.body(), Some(r#"{"error":"invalid_grant"}"#));
        assert!(e.to_string().contains("invalid_grant"));

        assert_eq!(AuthError::Transport("dns".into()).body(), None);
    }
}
