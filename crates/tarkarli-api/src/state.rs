//! Application state wiring the relay together.
//!
//! The relay is built once from explicit configuration and shared read-only
//! by every request; no process-wide mutable state exists.

use std::sync::Arc;
use std::time::Duration;

use tarkarli_core::chat::prompt::PromptAssembler;
use tarkarli_core::chat::relay::ChatRelay;
use tarkarli_core::llm::box_provider::BoxLlmProvider;
use tarkarli_infra::llm::gemini::GeminiProvider;
use tarkarli_types::config::RelayConfig;

/// Shared application state used by both the CLI and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
    /// Whether a usable upstream API key was found at startup.
    pub upstream_configured: bool,
}

impl AppState {
    /// Build the Gemini-backed relay from configuration.
    pub fn from_config(config: &RelayConfig) -> anyhow::Result<Self> {
        let provider = GeminiProvider::from_settings(
            &config.gemini,
            Duration::from_secs(config.upstream_timeout_secs),
        )?;
        let upstream_configured = provider.is_configured();

        if upstream_configured {
            tracing::info!(model = %config.gemini.model, "Gemini upstream configured");
        } else {
            tracing::warn!(
                "GEMINI_API_KEY is not set; chat requests will get the not-configured reply"
            );
        }

        let assembler = PromptAssembler::new(config.gemini.model.clone())
            .with_history_window(config.history_window);
        let relay = ChatRelay::new(BoxLlmProvider::new(provider), assembler);

        Ok(Self::new(relay, upstream_configured))
    }

    pub fn new(relay: ChatRelay, upstream_configured: bool) -> Self {
        Self {
            relay: Arc::new(relay),
            upstream_configured,
        }
    }
}
