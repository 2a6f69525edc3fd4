mod dto;
mod error;
mod handlers;
mod state;

pub use dto::{ChatRequest, ChatResponse};
pub use handlers::READY_MESSAGE;
pub use state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// `GET /` serves the static frontend when `static_dir` holds an
/// `index.html`, otherwise a plain readiness message.
pub fn router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/chat", post(handlers::chat))
        .route("/health", get(handlers::health));

    let app = match static_dir.filter(|dir| dir.join("index.html").is_file()) {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving static frontend");
            api.fallback_service(ServeDir::new(dir))
        }
        None => api.route("/", get(handlers::ready)),
    };

    app.layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
