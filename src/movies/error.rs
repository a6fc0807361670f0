use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::tmdb::TmdbError;

/// Single error funnel for the movie routes. Every failure, upstream or
/// local, turns into the same generic 500 body; the real cause only goes
/// to the log. Upstream 4xx/5xx are flattened too, not passed through.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] TmdbError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Something went wrong!" })),
        )
            .into_response()
    }
}
