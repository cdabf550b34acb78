//! GeminiProvider -- concrete [`LlmProvider`] implementation for Google Gemini.
//!
//! Sends one non-streaming request to
//! `{base_url}/v1beta/models/{model}:generateContent` per completion. There
//! is no retry: any failure is reported to the relay, which falls back to
//! its canned replies.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and sent in the
//! `x-goog-api-key` header, so it never appears in URLs, error messages, or
//! logs.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use tarkarli_core::llm::provider::LlmProvider;
use tarkarli_types::config::GeminiSettings;
use tarkarli_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::types::{
    GeminiContent, GeminiErrorEnvelope, GeminiPart, GeminiRequest, GeminiResponse,
    GenerationConfig,
};
use crate::credential::usable_api_key;

/// Google Gemini LLM provider.
///
/// A provider without a usable key is still constructible; its `complete`
/// returns [`LlmError::NotConfigured`] without touching the network.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key, `None` when not configured
    /// * `model` - Model identifier (e.g., "gemini-1.5-flash")
    /// * `timeout` - Transport timeout for the HTTP client
    pub fn new(
        api_key: Option<SecretString>,
        model: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        })
    }

    /// Build a provider from config settings, filtering placeholder keys.
    pub fn from_settings(
        settings: &GeminiSettings,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let provider = Self::new(
            usable_api_key(settings.api_key.as_deref()),
            settings.model.clone(),
            timeout,
        )?;
        Ok(provider.with_base_url(settings.base_url.clone()))
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Whether a usable API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    /// Convert a generic [`CompletionRequest`] into a [`GeminiRequest`].
    fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|m| GeminiContent {
                role: Some(m.role.to_string()),
                parts: vec![GeminiPart::text(m.content.clone())],
            })
            .collect();

        GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(request.system.clone())],
            },
            contents,
            generation_config: GenerationConfig {
                temperature: request.sampling.temperature,
                top_k: request.sampling.top_k,
                top_p: request.sampling.top_p,
                max_output_tokens: request.sampling.max_output_tokens,
            },
            safety_settings: request.safety.clone(),
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug; the key stays out of
// every formatted representation.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let Some(api_key) = &self.api_key else {
            return Err(LlmError::NotConfigured);
        };

        let body = Self::to_gemini_request(request);
        let url = self.url(&request.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&error_body)
                .map(|env| env.error.message)
                .unwrap_or(error_body);
            return Err(match status.as_u16() {
                429 => LlmError::RateLimited,
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {message}"),
                },
            });
        }

        let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        let finish_reason = gemini_resp.finish_reason();
        let Some(content) = gemini_resp.first_text() else {
            tracing::debug!(finish_reason = ?finish_reason, "Gemini returned no candidate text");
            return Err(LlmError::EmptyResponse);
        };

        tracing::debug!(
            gen_ai.response.finish_reasons = ?finish_reason,
            chars = content.len(),
            "Gemini completion received"
        );

        Ok(CompletionResponse {
            content,
            model: gemini_resp.model_version.unwrap_or_else(|| self.model.clone()),
            finish_reason,
        })
    }
}
