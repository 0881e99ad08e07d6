pub mod feedback_chat;
pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::rate_limit::{rps_middleware, RateLimiter};
use crate::AppState;

pub fn router(state: AppState, admin_rps: u32) -> Router {
    let admin_chat_api = Router::new()
        .route(
            "/api/admin/chat/feedback/:feedback_id",
            get(feedback_chat::get_thread).post(feedback_chat::submit_reply),
        )
        .route(
            "/api/admin/chat/unread",
            get(feedback_chat::get_unread_count),
        )
        .layer(axum::middleware::from_fn_with_state(
            RateLimiter::new(admin_rps),
            rps_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .merge(admin_chat_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}
