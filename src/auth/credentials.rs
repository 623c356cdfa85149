//! Environment-based configuration for the exchange client.

use secrecy::{ExposeSecret, SecretString};

/// Default variable holding the wallet private key.
pub const PRIVATE_KEY_VAR: &str = "EXCHANGE_PRIVATE_KEY";
/// Default variable holding a previously issued API key.
pub const API_KEY_VAR: &str = "EXCHANGE_API_KEY";
/// Default variable overriding the REST base URL.
pub const BASE_URL_VAR: &str = "EXCHANGE_BASE_URL";

/// Client configuration read from environment variables.
///
/// Only the private key is required. Without an API key the client
/// provisions one on its first authenticated call.
#[derive(Clone)]
pub struct EnvConfig {
    private_key: SecretString,
    /// Previously issued API key, if any
    pub api_key: Option<String>,
    /// Base URL override, if any
    pub base_url: Option<String>,
}

impl EnvConfig {
    /// Read the configuration from the default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `EXCHANGE_PRIVATE_KEY` is not set.
    pub fn from_env() -> Self {
        Self::try_from_env()
            .unwrap_or_else(|| panic!("Environment variable {PRIVATE_KEY_VAR} not set"))
    }

    /// Try to read the configuration from the default environment variables.
    ///
    /// Returns `None` if `EXCHANGE_PRIVATE_KEY` is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(PRIVATE_KEY_VAR, API_KEY_VAR, BASE_URL_VAR)
    }

    /// Try to read the configuration from custom variable names.
    pub fn try_from_env_vars(key_var: &str, api_key_var: &str, base_url_var: &str) -> Option<Self> {
        let private_key = std::env::var(key_var).ok()?;
        let api_key = std::env::var(api_key_var).ok().filter(|key| !key.is_empty());
        let base_url = std::env::var(base_url_var).ok().filter(|url| !url.is_empty());

        Some(Self {
            private_key: SecretString::from(private_key),
            api_key,
            base_url,
        })
    }

    /// Get the private key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_private_key(&self) -> &str {
        self.private_key.expose_secret()
    }
}

impl std::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("private_key", &"[REDACTED]")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_private_key() {
        let config = EnvConfig::try_from_env_vars(
            "EXCHANGE_TEST_UNSET_PRIVATE_KEY",
            "EXCHANGE_TEST_UNSET_API_KEY",
            "EXCHANGE_TEST_UNSET_BASE_URL",
        );
        assert!(config.is_none());
    }

    #[test]
    fn test_debug_redacted() {
        let config = EnvConfig {
            private_key: SecretString::from("0xdeadbeef".to_string()),
            api_key: Some("issued_key".to_string()),
            base_url: None,
        };
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("deadbeef"));
        assert!(!debug_str.contains("issued_key"));
        assert_eq!(config.expose_private_key(), "0xdeadbeef");
    }
}
