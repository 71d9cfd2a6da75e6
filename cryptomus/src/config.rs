//! Client configuration.
//!
//! Credentials are required; everything else has a default. Values can be
//! given explicitly or loaded from the process environment.
//!
//! # Environment Variables
//!
//! - `CRYPTOMUS_MERCHANT` - Merchant identifier (required)
//! - `CRYPTOMUS_PAYMENT_TOKEN` - Payment API key (required)
//! - `CRYPTOMUS_BASE_URL` - Override the API base URL
//! - `CRYPTOMUS_TIMEOUT_SECS` - Request timeout in seconds (default: transport default)

use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, ENV_BASE_URL, ENV_MERCHANT, ENV_PAYMENT_TOKEN, ENV_TIMEOUT_SECS,
};
use crate::error::CryptomusError;

/// Settings for [`crate::Cryptomus`].
#[derive(Clone)]
pub struct CryptomusConfig {
    /// Merchant identifier sent in the `Merchant` header.
    pub merchant: String,
    /// Secret used to sign requests and verify webhooks. Never transmitted.
    pub payment_token: String,
    /// API base URL; routes are appended to it.
    pub base_url: String,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
}

impl CryptomusConfig {
    /// Creates a config for the production API.
    #[must_use]
    pub fn new(merchant: impl Into<String>, payment_token: impl Into<String>) -> Self {
        Self {
            merchant: merchant.into(),
            payment_token: payment_token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets a timeout for every request.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError::MissingConfig`] if a credential is unset and
    /// [`CryptomusError::InvalidConfig`] if the timeout is not a whole number.
    pub fn from_env() -> Result<Self, CryptomusError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CryptomusError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let merchant = get(ENV_MERCHANT).ok_or(CryptomusError::MissingConfig(ENV_MERCHANT))?;
        let payment_token =
            get(ENV_PAYMENT_TOKEN).ok_or(CryptomusError::MissingConfig(ENV_PAYMENT_TOKEN))?;

        let mut config = Self::new(merchant, payment_token);
        if let Some(base_url) = get(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| CryptomusError::InvalidConfig {
                    key: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

impl std::fmt::Debug for CryptomusConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptomusConfig")
            .field("merchant", &self.merchant)
            .field("payment_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_new_uses_production_defaults() {
        let config = CryptomusConfig::new("merchant-1", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let config = CryptomusConfig::from_lookup(lookup(&[
            (ENV_MERCHANT, "merchant-1"),
            (ENV_PAYMENT_TOKEN, "secret"),
            (ENV_BASE_URL, "http://127.0.0.1:9000"),
            (ENV_TIMEOUT_SECS, "15"),
        ]))
        .unwrap();
        assert_eq!(config.merchant, "merchant-1");
        assert_eq!(config.payment_token, "secret");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_from_lookup_missing_token() {
        let err = CryptomusConfig::from_lookup(lookup(&[
            (ENV_MERCHANT, "merchant-1"),
            (ENV_PAYMENT_TOKEN, "  "),
        ]))
        .unwrap_err();
        assert!(matches!(err, CryptomusError::MissingConfig(ENV_PAYMENT_TOKEN)));
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let err = CryptomusConfig::from_lookup(lookup(&[
            (ENV_MERCHANT, "merchant-1"),
            (ENV_PAYMENT_TOKEN, "secret"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, CryptomusError::InvalidConfig { key: ENV_TIMEOUT_SECS, .. }));
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", CryptomusConfig::new("merchant-1", "top-secret"));
        assert!(rendered.contains("merchant-1"));
        assert!(!rendered.contains("top-secret"));
    }
}
