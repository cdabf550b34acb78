//! LlmProvider trait definition.

use tarkarli_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for generative-text backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Implementations
/// live in tarkarli-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// Exactly one upstream call per invocation; no retries.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
