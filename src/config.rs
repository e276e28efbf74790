//! Remote endpoint configuration.
//!
//! The remote strategy needs a single credential plus the model and
//! endpoint to call. All three resolve from the process environment, with
//! embedded defaults so a fresh checkout works without setup; environment
//! values take precedence.

use std::env;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Environment variable overriding the endpoint base URL.
pub const ENDPOINT_ENV: &str = "GEMINI_ENDPOINT";

/// Demo credential used when no environment key is set. Real deployments
/// set [`API_KEY_ENV`].
const DEFAULT_API_KEY: &str = "demo-key-replace-me";

const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the remote verification strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// API key sent with each request.
    pub api_key: String,
    /// Model name inserted into the request path.
    pub model: String,
    /// Endpoint base URL (no trailing slash).
    pub endpoint: String,
}

impl RemoteConfig {
    /// Resolve configuration from the environment, falling back to the
    /// embedded defaults for anything unset.
    pub fn from_env() -> Self {
        RemoteConfig {
            api_key: env::var(API_KEY_ENV).unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
            model: env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            endpoint: env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        }
    }

    /// Build a configuration with explicit values, for tests and embedding.
    pub fn new<S: Into<String>>(api_key: S, model: S, endpoint: S) -> Self {
        RemoteConfig {
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
        }
    }

    /// The full URL for a completion request.
    pub fn completion_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = RemoteConfig::new("key", "model-x", "http://localhost:8080");
        assert_eq!(
            config.completion_url(),
            "http://localhost:8080/v1beta/models/model-x:generateContent?key=key"
        );
    }

    #[test]
    fn test_from_env_has_defaults() {
        // Whatever the environment holds, every field resolves to
        // something non-empty.
        let config = RemoteConfig::from_env();
        assert!(!config.api_key.is_empty());
        assert!(!config.model.is_empty());
        assert!(!config.endpoint.is_empty());
    }
}
