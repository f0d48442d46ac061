//! Handlers for `/messages` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/messages` | Every stored message, newest first |

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use tunelith_core::{Message, MessageStore};

use crate::error::ApiError;

/// Response body of `GET /messages`.
#[derive(Debug, Serialize)]
pub struct MessageList {
  pub success:  bool,
  pub count:    usize,
  pub messages: Vec<Message>,
}

/// `GET /messages`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<MessageList>, ApiError>
where
  S: MessageStore,
{
  let messages = store
    .list_all()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(MessageList { success: true, count: messages.len(), messages }))
}
