//! Shared domain types for the Tarkarli travel assistant.
//!
//! Chat turns and replies, the JSON wire shapes of the chat endpoint,
//! upstream-neutral LLM request/response types, configuration, and the
//! associated error enums.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
