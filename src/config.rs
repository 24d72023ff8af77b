use std::fmt;

use serde::Deserialize;

use crate::{
    constants::{
        DEFAULT_REQUEST_TIMEOUT_SECS, ENV_PRODUCTION_URL, ENV_SANDBOX_URL, ENV_SHARED_SECRET,
        ENV_TIMEOUT_SECS, PRODUCTION_VERIFY_RECEIPT_URL, SANDBOX_VERIFY_RECEIPT_URL,
    },
    errors::ConfigError,
};

/// Configuration of a receipt validator. The endpoint mapping is fixed once
/// the validator is built from it.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ReceiptValidatorConfig {
    pub production_url: String,
    pub sandbox_url: String,
    /// App-specific shared secret. Only needed for auto-renewable
    /// subscription receipts.
    pub shared_secret: Option<String>,
    /// If the service reports that the receipt belongs to the other
    /// environment, validate once more against that environment.
    pub retry_in_correct_environment: bool,
    pub request_timeout_secs: u64,
}

impl Default for ReceiptValidatorConfig {
    fn default() -> Self {
        Self {
            production_url: PRODUCTION_VERIFY_RECEIPT_URL.to_owned(),
            sandbox_url: SANDBOX_VERIFY_RECEIPT_URL.to_owned(),
            shared_secret: None,
            retry_in_correct_environment: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for ReceiptValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptValidatorConfig")
            .field("production_url", &self.production_url)
            .field("sandbox_url", &self.sandbox_url)
            .field("shared_secret", &self.shared_secret.as_ref().map(|_| "<redacted>"))
            .field(
                "retry_in_correct_environment",
                &self.retry_in_correct_environment,
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl ReceiptValidatorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let request_timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?,
            None => defaults.request_timeout_secs,
        };
        Ok(Self {
            production_url: lookup(ENV_PRODUCTION_URL).unwrap_or(defaults.production_url),
            sandbox_url: lookup(ENV_SANDBOX_URL).unwrap_or(defaults.sandbox_url),
            shared_secret: lookup(ENV_SHARED_SECRET).filter(|s| !s.is_empty()),
            retry_in_correct_environment: defaults.retry_in_correct_environment,
            request_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_the_fixed_endpoints() {
        let config = ReceiptValidatorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.production_url, PRODUCTION_VERIFY_RECEIPT_URL);
        assert_eq!(config.sandbox_url, SANDBOX_VERIFY_RECEIPT_URL);
        assert_eq!(config.shared_secret, None);
        assert!(config.retry_in_correct_environment);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = ReceiptValidatorConfig::from_lookup(lookup_from(&[
            (ENV_SHARED_SECRET, "s3cr3t"),
            (ENV_SANDBOX_URL, "http://localhost:9000/verifyReceipt"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();
        assert_eq!(config.shared_secret.as_deref(), Some("s3cr3t"));
        assert_eq!(config.sandbox_url, "http://localhost:9000/verifyReceipt");
        assert_eq!(config.production_url, PRODUCTION_VERIFY_RECEIPT_URL);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn empty_shared_secret_is_ignored() {
        let config =
            ReceiptValidatorConfig::from_lookup(lookup_from(&[(ENV_SHARED_SECRET, "")])).unwrap();
        assert_eq!(config.shared_secret, None);
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let result = ReceiptValidatorConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: ENV_TIMEOUT_SECS, .. })
        ));
    }

    #[test]
    fn debug_output_redacts_shared_secret() {
        let config = ReceiptValidatorConfig {
            shared_secret: Some("s3cr3t".to_owned()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("shared_secret: Some(\"<redacted>\")"));
        assert!(debug.contains(PRODUCTION_VERIFY_RECEIPT_URL));

        let debug = format!("{:?}", ReceiptValidatorConfig::default());
        assert!(debug.contains("shared_secret: None"));
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ReceiptValidatorConfig = serde_json::from_value(serde_json::json!({
            "shared_secret": "abc",
            "retry_in_correct_environment": false,
        }))
        .unwrap();
        assert_eq!(config.shared_secret.as_deref(), Some("abc"));
        assert!(!config.retry_in_correct_environment);
        assert_eq!(config.production_url, PRODUCTION_VERIFY_RECEIPT_URL);
    }
}
