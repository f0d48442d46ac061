//! Liveness and database diagnostics.
//!
//! Neither endpoint checks that mail can actually be delivered; they only
//! report whether credentials are configured.

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use chrono::Local;
use serde::Serialize;
use serde_json::json;
use tunelith_core::{Message, MessageStore, Notifier};

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
  pub status:           &'static str,
  pub timestamp:        String,
  pub messages_in_db:   u64,
  pub database_exists:  bool,
  pub database_path:    String,
  pub email_configured: bool,
  pub environment:      &'static str,
  pub version:          &'static str,
}

#[derive(Debug, Serialize)]
pub struct DatabaseReport {
  pub database_status: &'static str,
  pub messages_count:  usize,
  pub database_exists: bool,
  pub db_path:         String,
  pub environment:     &'static str,
  pub recent_messages: Vec<Message>,
}

async fn database_exists<S, N>(state: &AppState<S, N>) -> bool
where
  S: MessageStore,
  N: Notifier,
{
  tokio::fs::try_exists(state.config.database_path())
    .await
    .unwrap_or(false)
}

/// `GET /health`
pub async fn health<S, N>(State(state): State<AppState<S, N>>) -> Response
where
  S: MessageStore + Clone + 'static,
  N: Notifier + Clone + 'static,
{
  let count = match state.store.count().await {
    Ok(n) => n,
    Err(e) => {
      tracing::error!(error = %e, "health check could not read the store");
      return (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "status": "error", "error": "message store unavailable" })),
      )
        .into_response();
    }
  };

  Json(Health {
    status:           "healthy",
    timestamp:        Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    messages_in_db:   count,
    database_exists:  database_exists(&state).await,
    database_path:    state.config.database_path().display().to_string(),
    email_configured: state.config.mail_settings().is_configured(),
    environment:      state.config.environment(),
    version:          env!("CARGO_PKG_VERSION"),
  })
  .into_response()
}

/// `GET /test_db`
pub async fn test_db<S, N>(State(state): State<AppState<S, N>>) -> Response
where
  S: MessageStore + Clone + 'static,
  N: Notifier + Clone + 'static,
{
  let db_path = state.config.database_path().display().to_string();

  match state.store.list_all().await {
    Ok(messages) => {
      let messages_count = messages.len();
      let recent_messages = messages.into_iter().take(3).collect();
      Json(DatabaseReport {
        database_status: "OK",
        messages_count,
        database_exists: database_exists(&state).await,
        db_path,
        environment: state.config.environment(),
        recent_messages,
      })
      .into_response()
    }
    Err(e) => {
      tracing::error!(error = %e, "database diagnostic failed");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
          "database_status": "ERROR",
          "error": "message store unavailable",
          "db_path": db_path,
        })),
      )
        .into_response()
    }
  }
}
