//! Chat relay pipeline.
//!
//! `validate` → `prompt` → upstream (`crate::llm`) → reply, or `fallback`
//! when the upstream cannot answer. `relay::ChatRelay` wires the steps.

pub mod fallback;
pub mod prompt;
pub mod relay;
pub mod validate;
