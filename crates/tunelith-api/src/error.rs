//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    // The cause stays in the server log; clients get a fixed message.
    tracing::error!(error = %self, "api request failed");
    let message = match &self {
      ApiError::Store(_) => "failed to load messages",
    };
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(json!({ "success": false, "error": message })),
    )
      .into_response()
  }
}
