//! Chat relay endpoint.
//!
//! POST /api/v1/chat (alias POST /functions/v1/ai-chat)
//!
//! Request:  `{ "messages": [{ "role": "user", "content": "..." }], "userLocation": "..." }`
//! Response: `{ "response": "...", "success": true }` or, when the upstream
//! could not answer, `{ "error": "...", "response": "...", "details": "..." }`.
//! Both are HTTP 200. Only a malformed body yields 400 `{ "error": "..." }`.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use tarkarli_types::chat::ChatResponseBody;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/v1/chat -- relay a conversation to the travel assistant.
#[tracing::instrument(
    name = "chat_request",
    skip_all,
    fields(request_id = %uuid::Uuid::now_v7(), body_bytes = body.len())
)]
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponseBody>, AppError> {
    let started = Instant::now();

    let reply = state.relay.handle(&body).await?;

    tracing::info!(
        succeeded = reply.succeeded,
        error = reply.diagnostic.as_ref().map(|d| d.error.as_str()),
        response_time_ms = started.elapsed().as_millis() as u64,
        "chat reply sent"
    );

    Ok(Json(reply.into()))
}
