//! Encoder configuration types.
//!
//! Config structs are plain serde values so host applications can persist
//! them alongside their own settings. Environment lookups happen only in
//! the `from_env` constructors; encoder logic never reads the environment
//! directly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable consulted by [`VoyageConfig::from_env`].
pub const VOYAGE_API_KEY_ENV: &str = "VOYAGE_API_KEY";

/// Environment variable consulted by [`OpenAiConfig::from_env`].
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Retry behavior for remote embedding calls.
///
/// Defaults to three total attempts with a fixed one-second pause between
/// them. There is no backoff or jitter: embedding calls are short and the
/// budget is small enough that a flat delay behaves the same in practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total number of attempts, including the first call.
    pub max_attempts: u32,
    /// Fixed pause between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryConfig {
    /// Overrides the total attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Overrides the pause between attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Configuration for the VoyageAI encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageConfig {
    /// API key. A `None` here makes encoder construction fail, so resolve
    /// the key first, explicitly or via [`VoyageConfig::from_env`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// API endpoint base URL (for self-hosted or compatible gateways).
    pub base_url: String,
    /// Retry behavior for embedding calls.
    pub retry: RetryConfig,
}

impl Default for VoyageConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "voyage-2".to_string(),
            base_url: "https://api.voyageai.com/v1".to_string(),
            retry: RetryConfig::default(),
        }
    }
}

impl VoyageConfig {
    /// Default configuration with the key taken from the explicit argument
    /// or, when absent, from `VOYAGE_API_KEY`. The explicit argument always
    /// wins over the environment.
    pub fn from_env(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.or_else(|| std::env::var(VOYAGE_API_KEY_ENV).ok()),
            ..Default::default()
        }
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the retry behavior.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

/// Configuration for the OpenAI encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key. Same resolution rules as [`VoyageConfig::api_key`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// API endpoint base URL.
    pub base_url: String,
    /// Retry behavior for embedding calls.
    pub retry: RetryConfig,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "text-embedding-3-small".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            retry: RetryConfig::default(),
        }
    }
}

impl OpenAiConfig {
    /// Default configuration with the key taken from the explicit argument
    /// or, when absent, from `OPENAI_API_KEY`.
    pub fn from_env(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.or_else(|| std::env::var(OPENAI_API_KEY_ENV).ok()),
            ..Default::default()
        }
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the retry behavior.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_defaults() {
        let retry = RetryConfig::default();
        assert_eq!(retry.max_attempts, 3);
        assert_eq!(retry.delay, Duration::from_secs(1));
    }

    #[test]
    fn retry_builders() {
        let retry = RetryConfig::default()
            .with_max_attempts(5)
            .with_delay(Duration::from_millis(250));
        assert_eq!(retry.max_attempts, 5);
        assert_eq!(retry.delay, Duration::from_millis(250));
    }

    #[test]
    fn voyage_defaults() {
        let config = VoyageConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "voyage-2");
        assert_eq!(config.base_url, "https://api.voyageai.com/v1");
    }

    #[test]
    fn openai_defaults() {
        let config = OpenAiConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "text-embedding-3-small");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn voyage_config_roundtrip() {
        let config = VoyageConfig::default()
            .with_model("voyage-large-2")
            .with_base_url("https://gateway.example.com/v1")
            .with_retry(RetryConfig::default().with_max_attempts(5));

        let json = serde_json::to_string_pretty(&config).unwrap();
        let deserialized: VoyageConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, config);
        // Absent keys stay absent on disk.
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn openai_config_roundtrip() {
        let mut config = OpenAiConfig::default();
        config.api_key = Some("sk-test".to_string());

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: OpenAiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.api_key, Some("sk-test".to_string()));
        assert_eq!(deserialized, config);
    }
}
