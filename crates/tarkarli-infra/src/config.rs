//! Configuration loader for the chat relay.
//!
//! Reads `config.toml` from the data directory (`~/.tarkarli/` in
//! production) and deserializes it into [`RelayConfig`]. Falls back to
//! defaults when the file is missing or malformed, then applies environment
//! overrides.

use std::path::{Path, PathBuf};

use tarkarli_types::config::RelayConfig;

/// Environment variable holding the Gemini API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "TARKARLI_GEMINI_MODEL";
pub const ENV_BASE_URL: &str = "TARKARLI_GEMINI_BASE_URL";
pub const ENV_HOST: &str = "TARKARLI_HOST";
pub const ENV_PORT: &str = "TARKARLI_PORT";
pub const ENV_DATA_DIR: &str = "TARKARLI_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `TARKARLI_DATA_DIR` environment variable
/// 2. `~/.tarkarli`
/// 3. `.tarkarli` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".tarkarli");
    }

    PathBuf::from(".tarkarli")
}

/// Load relay configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`RelayConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_relay_config(data_dir: &Path) -> RelayConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return RelayConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return RelayConfig::default();
        }
    };

    match toml::from_str::<RelayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            RelayConfig::default()
        }
    }
}

/// Apply environment overrides on top of file configuration.
///
/// `lookup` is `std::env::var` in production; tests pass a map.
pub fn apply_env_overrides<F>(mut config: RelayConfig, lookup: F) -> RelayConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(ENV_API_KEY) {
        config.gemini.api_key = Some(key);
    }
    if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
        config.gemini.model = model;
    }
    if let Some(base_url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
        config.gemini.base_url = base_url;
    }
    if let Some(host) = lookup(ENV_HOST).filter(|h| !h.trim().is_empty()) {
        config.host = host;
    }
    if let Some(port) = lookup(ENV_PORT) {
        match port.trim().parse::<u16>() {
            Ok(port) => config.port = port,
            Err(err) => tracing::warn!("Ignoring {ENV_PORT}={port:?}: {err}"),
        }
    }
    config
}

/// Load `config.toml` from the resolved data directory and apply process
/// environment overrides.
pub async fn load_config() -> RelayConfig {
    let data_dir = resolve_data_dir();
    let config = load_relay_config(&data_dir).await;
    apply_env_overrides(config, |name| std::env::var(name).ok())
}
