//! Chat relay logic and provider trait definitions.
//!
//! This crate defines the `LlmProvider` port that the infrastructure layer
//! implements, plus the relay pipeline itself: request validation, prompt
//! assembly, and the keyword fallback responder. It depends only on
//! `tarkarli-types` -- never on `tarkarli-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
