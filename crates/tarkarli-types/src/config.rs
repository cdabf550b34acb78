//! Relay configuration types.
//!
//! `RelayConfig` represents `config.toml` in the data directory. Every field
//! has a default so an empty or missing file yields a runnable server (the
//! upstream simply reports "not configured" until a key is supplied).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the chat relay server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Transport timeout of the upstream HTTP client, in seconds.
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Number of trailing conversation turns forwarded upstream.
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Gemini upstream settings.
    #[serde(default)]
    pub gemini: GeminiSettings,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_upstream_timeout_secs() -> u64 {
    60
}

fn default_history_window() -> usize {
    10
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            history_window: default_history_window(),
            gemini: GeminiSettings::default(),
        }
    }
}

/// Settings for the Gemini `generateContent` upstream.
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; usually supplied through `GEMINI_API_KEY` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

// The API key must never reach logs, so Debug is written by hand.
impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_config_default_values() {
        let config = RelayConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8787);
        assert_eq!(config.history_window, 10);
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert!(config.gemini.api_key.is_none());
    }

    #[test]
    fn test_relay_config_deserialize_with_defaults() {
        let config: RelayConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 8787);
        assert_eq!(config.upstream_timeout_secs, 60);
        assert_eq!(
            config.gemini.base_url,
            "https://generativelanguage.googleapis.com"
        );
    }

    #[test]
    fn test_relay_config_deserialize_with_values() {
        let toml_str = r#"
port = 9000
history_window = 6

[gemini]
model = "gemini-2.0-flash"
api_key = "abc123"
"#;
        let config: RelayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.history_window, 6);
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_gemini_settings_debug_redacts_key() {
        let settings = GeminiSettings {
            api_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
