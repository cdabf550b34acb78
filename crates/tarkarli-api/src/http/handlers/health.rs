use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /health - liveness plus a hint whether the upstream key is set.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "upstream_configured": state.upstream_configured,
    }))
}
