use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::dto::*;
use super::error::ApiError;
use super::state::AppState;
use crate::engine;

/// Plain-text body of `GET /` when no frontend is deployed
pub const READY_MESSAGE: &str = "BandarAbbas AI backend is running.";

/// POST /api/chat - Ask the guide a question
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) =
        body.map_err(|e| ApiError::BadRequest(format!("invalid request body: {}", e.body_text())))?;

    let message = req.message.as_deref().map(str::trim).unwrap_or_default();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message cannot be empty".into()));
    }

    let reply =
        engine::answer(message, &state.listings, state.llm.as_ref(), &state.config).await?;

    Ok(Json(ChatResponse { reply }))
}

/// GET / - Readiness message
pub async fn ready() -> &'static str {
    READY_MESSAGE
}

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
