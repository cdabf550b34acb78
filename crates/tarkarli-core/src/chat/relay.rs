//! The chat relay: validate, assemble, call upstream once, fall back.
//!
//! The relay is fail-open. Any upstream problem (missing credential,
//! transport error, non-2xx status, malformed or empty payload, even a panic
//! inside the provider) becomes a [`ChatReply`] with `succeeded == false`
//! and displayable text. Only request validation can produce an error.

use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use tracing::{info_span, Instrument};

use tarkarli_types::chat::{ChatReply, ChatRequest};
use tarkarli_types::error::ValidationError;
use tarkarli_types::llm::LlmError;

use super::fallback::FallbackResponder;
use super::prompt::PromptAssembler;
use super::validate::parse_chat_request;
use crate::llm::box_provider::BoxLlmProvider;

/// `error` string of a reply when no credential is configured.
pub const NOT_CONFIGURED_ERROR: &str = "AI service not configured";

/// `error` string of a reply for every other upstream failure.
pub const UPSTREAM_FAILURE_ERROR: &str = "Failed to get AI response";

/// Stateless request/response relay to the upstream model.
///
/// Holds only immutable configuration, so one instance can be shared across
/// requests behind an `Arc`.
#[derive(Debug)]
pub struct ChatRelay {
    upstream: BoxLlmProvider,
    assembler: PromptAssembler,
    fallback: FallbackResponder,
}

impl ChatRelay {
    pub fn new(upstream: BoxLlmProvider, assembler: PromptAssembler) -> Self {
        Self {
            upstream,
            assembler,
            fallback: FallbackResponder::new(),
        }
    }

    pub fn upstream_name(&self) -> &str {
        self.upstream.name()
    }

    pub fn model(&self) -> &str {
        self.upstream.model()
    }

    /// Validate a raw body and relay it.
    ///
    /// Returns `Err` only for client input errors; in that case the upstream
    /// is never called.
    pub async fn handle(&self, body: &[u8]) -> Result<ChatReply, ValidationError> {
        let request = parse_chat_request(body)?;
        Ok(self.reply(&request).await)
    }

    /// Relay a validated request. Never fails.
    pub async fn reply(&self, request: &ChatRequest) -> ChatReply {
        let completion = self.assembler.build(request);
        tracing::debug!(
            turns_received = request.turns().len(),
            turns_forwarded = completion.messages.len(),
            has_location = request.location_hint().is_some(),
            "relaying chat request"
        );

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.upstream.name(),
            gen_ai.request.model = %completion.model,
            gen_ai.request.max_tokens = completion.sampling.max_output_tokens,
            gen_ai.request.temperature = completion.sampling.temperature,
        );

        let outcome = AssertUnwindSafe(self.upstream.complete(&completion))
            .catch_unwind()
            .instrument(span)
            .await;

        let result = match outcome {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(provider = self.upstream.name(), "upstream call panicked");
                Err(LlmError::Provider {
                    message: "internal error while contacting the AI service".to_string(),
                })
            }
        };

        match result {
            Ok(response) if !response.content.trim().is_empty() => {
                ChatReply::answered(response.content)
            }
            Ok(_) => self.upstream_failure(request, LlmError::EmptyResponse),
            Err(LlmError::NotConfigured) => {
                tracing::warn!(
                    provider = self.upstream.name(),
                    "upstream API key missing, answering with not-configured message"
                );
                ChatReply::fallback(self.fallback.not_configured(), NOT_CONFIGURED_ERROR, None)
            }
            Err(err) => self.upstream_failure(request, err),
        }
    }

    fn upstream_failure(&self, request: &ChatRequest, err: LlmError) -> ChatReply {
        tracing::warn!(
            provider = self.upstream.name(),
            error = %err,
            "upstream call failed, answering from fallback table"
        );
        let text = self
            .fallback
            .respond(request.latest_user_text().unwrap_or_default());
        ChatReply::fallback(text, UPSTREAM_FAILURE_ERROR, Some(err.to_string()))
    }
}
