//! Infrastructure layer for the Tarkarli travel assistant.
//!
//! Contains the Gemini implementation of the `LlmProvider` trait defined in
//! `tarkarli-core`, API credential resolution, and configuration loading
//! (`config.toml` plus environment overrides).

pub mod config;
pub mod credential;
pub mod llm;
