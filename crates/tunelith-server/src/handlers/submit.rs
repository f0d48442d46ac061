//! `POST /send_message` — the contact-form submission endpoint.
//!
//! AJAX callers (`X-Requested-With: XMLHttpRequest`) receive JSON; plain form
//! posts are redirected back to `/` on success. Failures are always JSON.

use axum::{
  Json,
  extract::{Form, State, rejection::FormRejection},
  http::HeaderMap,
  response::{IntoResponse, Redirect, Response},
};
use chrono::{Local, NaiveDateTime, SubsecRound as _};
use serde::{Deserialize, Serialize};
use tunelith_core::{MessageStore, Notifier};

use crate::{AppState, error::Error};

/// Form fields; absent fields are treated as empty and rejected by
/// validation.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
  #[serde(default)]
  pub name:    String,
  #[serde(default)]
  pub email:   String,
  #[serde(default)]
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
  pub success:    bool,
  pub message:    &'static str,
  pub id:         i64,
  pub email_sent: bool,
}

fn is_ajax(headers: &HeaderMap) -> bool {
  headers
    .get("x-requested-with")
    .and_then(|v| v.to_str().ok())
    .is_some_and(|v| v == "XMLHttpRequest")
}

/// The application clock at second resolution.
fn now() -> NaiveDateTime { Local::now().naive_local().trunc_subsecs(0) }

pub async fn handler<S, N>(
  State(state): State<AppState<S, N>>,
  headers: HeaderMap,
  form: Result<Form<ContactForm>, FormRejection>,
) -> Result<Response, Error>
where
  S: MessageStore + Clone + 'static,
  N: Notifier + Clone + 'static,
{
  let Form(form) = form.map_err(|e| Error::BadRequest(e.body_text()))?;
  tracing::info!(name = %form.name, email = %form.email, "received message");

  let message = tunelith_core::submit(
    state.store.as_ref(),
    state.notifier.as_ref(),
    &form.name,
    &form.email,
    &form.message,
    now(),
  )
  .await?;

  if is_ajax(&headers) {
    Ok(
      Json(SubmitResponse {
        success:    true,
        message:    "Message sent successfully!",
        id:         message.id,
        email_sent: message.notification_sent,
      })
      .into_response(),
    )
  } else {
    Ok(Redirect::to("/").into_response())
  }
}
