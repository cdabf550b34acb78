//! Chat relay domain and wire types.
//!
//! A conversation is supplied wholesale by the caller on every request; the
//! relay keeps nothing between requests. [`ChatRequest`] is the validated
//! form of the request body and [`ChatReply`] the outcome of one relay
//! round-trip, rendered to JSON through [`ChatResponseBody`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Speaker of a chat turn as the browser client names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// A validated chat request: a non-empty, ordered conversation (most recent
/// last) plus an optional free-text location of the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    turns: Vec<ChatTurn>,
    location_hint: Option<String>,
}

impl ChatRequest {
    /// Build a request, enforcing that `turns` is non-empty and that every
    /// turn carries non-blank content. A blank location hint is dropped.
    pub fn new(
        turns: Vec<ChatTurn>,
        location_hint: Option<String>,
    ) -> Result<Self, ValidationError> {
        if turns.is_empty() {
            return Err(ValidationError::EmptyMessages);
        }
        if let Some(index) = turns.iter().position(|t| t.content.trim().is_empty()) {
            return Err(ValidationError::EmptyContent { index });
        }

        let location_hint = location_hint
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        Ok(Self {
            turns,
            location_hint,
        })
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn location_hint(&self) -> Option<&str> {
        self.location_hint.as_deref()
    }

    /// Content of the most recent `user` turn, if any.
    pub fn latest_user_text(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.role == TurnRole::User)
            .map(|t| t.content.as_str())
    }
}

/// Machine-readable account of why a reply came from the fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDiagnostic {
    /// Short error string (e.g. "Failed to get AI response").
    pub error: String,
    /// Upstream error text, when one was available.
    pub details: Option<String>,
}

/// Outcome of one relay round-trip.
///
/// `succeeded == false` is still a displayable answer: the text came from
/// the local fallback table rather than the upstream model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub succeeded: bool,
    pub diagnostic: Option<ReplyDiagnostic>,
}

impl ChatReply {
    /// A reply produced by the upstream model.
    pub fn answered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
            diagnostic: None,
        }
    }

    /// A reply substituted locally after the upstream call could not complete.
    pub fn fallback(
        text: impl Into<String>,
        error: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            text: text.into(),
            succeeded: false,
            diagnostic: Some(ReplyDiagnostic {
                error: error.into(),
                details,
            }),
        }
    }
}

/// JSON body of a chat response (always HTTP 200).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponseBody {
    /// `{ "response": "...", "success": true }`
    Answered { response: String, success: bool },
    /// `{ "error": "...", "response": "...", "details": "..." }`
    Fallback {
        error: String,
        response: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl From<ChatReply> for ChatResponseBody {
    fn from(reply: ChatReply) -> Self {
        match reply.diagnostic {
            Some(diagnostic) if !reply.succeeded => ChatResponseBody::Fallback {
                error: diagnostic.error,
                response: reply.text,
                details: diagnostic.details,
            },
            _ => ChatResponseBody::Answered {
                response: reply.text,
                success: true,
            },
        }
    }
}

/// JSON body of a rejected request: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
