//! Opaque secret values (refresh token, client secret, access token).

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret string whose formatting output is always `[REDACTED]`.
///
/// The backing buffer is zeroed on drop. Use [`expose`](Self::expose) only
/// where the plaintext has to go on the wire (form body, header).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Bearer token obtained from the token endpoint. Lives for one round.
#[derive(Debug, Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_are_redacted() {
        let s = SecretString::new("hunter2");
        assert_eq!(format!("{s:?}"), "[REDACTED]");
        assert_eq!(format!("{s}"), "[REDACTED]");
        assert_eq!(s.expose(), "hunter2");
    }

    #[test]
    fn access_token_debug_hides_value() {
        let t = AccessToken::new("abc123");
        let dbg = format!("{t:?}");
        assert!(!dbg.contains("abc123"));
        assert_eq!(t.expose(), "abc123");
    }
}
