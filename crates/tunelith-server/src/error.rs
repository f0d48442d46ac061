//! Error types and axum `IntoResponse` implementation.

use std::any::Any;

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tunelith_core::{SubmitError, ValidationError};

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<SubmitError> for Error {
  fn from(e: SubmitError) -> Self {
    match e {
      SubmitError::Validation(v) => Error::Validation(v),
      SubmitError::Storage(s) => Error::Store(s),
    }
  }
}

fn failure(status: StatusCode, error: impl Into<String>) -> Response {
  (status, Json(json!({ "success": false, "error": error.into() }))).into_response()
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Validation(ValidationError::MissingField(field)) => failure(
        StatusCode::BAD_REQUEST,
        format!("All fields are required (missing: {field})"),
      ),
      Error::Validation(ValidationError::InvalidEmailShape) => {
        failure(StatusCode::BAD_REQUEST, "Invalid email address")
      }
      Error::BadRequest(msg) => failure(StatusCode::BAD_REQUEST, msg),
      Error::Store(e) => {
        tracing::error!(error = %e, "failed to save message");
        failure(StatusCode::INTERNAL_SERVER_ERROR, "Error while saving the message")
      }
    }
  }
}

/// Response for a handler that panicked. The payload is logged, never sent.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = err
    .downcast_ref::<String>()
    .map(String::as_str)
    .or_else(|| err.downcast_ref::<&str>().copied())
    .unwrap_or("unknown panic");
  tracing::error!(panic = detail, "request handler panicked");
  failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
