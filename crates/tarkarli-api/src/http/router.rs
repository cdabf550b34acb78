//! Axum router configuration with middleware.
//!
//! Routes:
//! - `POST /api/v1/chat` and `POST /functions/v1/ai-chat`: chat relay
//! - `GET /health`: liveness
//!
//! Middleware: CORS (any origin, `POST, OPTIONS`, the headers browser
//! clients of the hosted backend send), request tracing. `OPTIONS` is
//! answered by the CORS layer before routing; other methods on the chat
//! routes get 405.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ]);

    let api_routes = Router::new().route("/chat", post(handlers::chat::chat));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/functions/v1/ai-chat", post(handlers::chat::chat))
        .route("/health", get(handlers::health::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
