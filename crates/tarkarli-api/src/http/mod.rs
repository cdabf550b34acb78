//! HTTP layer for the chat relay.
//!
//! Axum router exposing the chat endpoint under `/api/v1/` (plus the
//! hosted-function style alias) with permissive CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
