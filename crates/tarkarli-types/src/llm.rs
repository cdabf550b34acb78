//! LLM request/response types for the chat relay.
//!
//! These model the data shapes exchanged with a generative-text provider in
//! a provider-neutral way. The Gemini-specific JSON lives in the infra crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chat::TurnRole;

/// Role of a message as the upstream model sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Model,
}

impl From<TurnRole> for MessageRole {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => MessageRole::User,
            TurnRole::Assistant => MessageRole::Model,
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Model => write!(f, "model"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "model" => Ok(MessageRole::Model),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Sampling parameters sent with every completion.
///
/// Fixed per deployment; callers cannot change them per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl SamplingParams {
    pub const RELAY: SamplingParams = SamplingParams {
        temperature: 0.7,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 1024,
    };
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::RELAY
    }
}

/// Harm categories screened by the upstream content filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

/// Blocking threshold for a harm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmThreshold {
    #[serde(rename = "BLOCK_LOW_AND_ABOVE")]
    BlockLowAndAbove,
    #[serde(rename = "BLOCK_MEDIUM_AND_ABOVE")]
    BlockMediumAndAbove,
    #[serde(rename = "BLOCK_ONLY_HIGH")]
    BlockOnlyHigh,
    #[serde(rename = "BLOCK_NONE")]
    BlockNone,
}

/// One content-safety rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmThreshold,
}

/// The four safety rules applied identically on every relay call.
pub fn relay_safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ]
    .into_iter()
    .map(|category| SafetySetting {
        category,
        threshold: HarmThreshold::BlockMediumAndAbove,
    })
    .collect()
}

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    /// System instruction text (persona block plus optional location clause).
    pub system: String,
    pub messages: Vec<Message>,
    pub sampling: SamplingParams,
    pub safety: Vec<SafetySetting>,
}

/// Response from an LLM provider for a completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Errors from LLM provider operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    /// No usable API credential (missing or a placeholder value).
    #[error("upstream API key is not configured")]
    NotConfigured,

    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("upstream returned no candidate text")]
    EmptyResponse,

    #[error("rate limited")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_maps_to_model_role() {
        assert_eq!(MessageRole::from(TurnRole::Assistant), MessageRole::Model);
        assert_eq!(MessageRole::from(TurnRole::User), MessageRole::User);
    }

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Model] {
            let parsed: MessageRole = role.to_string().parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_relay_sampling_values() {
        let params = SamplingParams::default();
        assert!((params.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(params.top_k, 40);
        assert!((params.top_p - 0.95).abs() < f64::EPSILON);
        assert_eq!(params.max_output_tokens, 1024);
    }

    #[test]
    fn test_relay_safety_settings_cover_four_categories() {
        let settings = relay_safety_settings();
        assert_eq!(settings.len(), 4);
        assert!(settings
            .iter()
            .all(|s| s.threshold == HarmThreshold::BlockMediumAndAbove));

        let json = serde_json::to_value(&settings[1]).unwrap();
        assert_eq!(json["category"], "HARM_CATEGORY_HATE_SPEECH");
        assert_eq!(json["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "HTTP 500: boom".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 500: boom");
    }
}
