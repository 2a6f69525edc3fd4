use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message shown for any unexpected failure
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// API-layer error type
#[derive(Debug)]
pub enum ApiError {
    /// 400 - Bad request (invalid input)
    BadRequest(String),

    /// 500 - Internal error. Details are logged, not returned.
    Internal(String),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

// Generation errors never get here (the engine falls back); anything else is a 500
impl From<crate::engine::EngineError> for ApiError {
    fn from(err: crate::engine::EngineError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Body for panics caught by `CatchPanicLayer`
pub fn panic_response(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    ApiError::Internal("handler panicked".into()).into_response()
}
