//! The submission pipeline: validate, notify, store.
//!
//! The sequence never branches back. A validation failure aborts before any
//! side effect; a storage failure aborts after the notification attempt,
//! which is neither rolled back nor repeated.

use chrono::NaiveDateTime;

use crate::{
  error::SubmitError,
  message::{Message, NewMessage},
  notify::Notifier,
  store::MessageStore,
  validate::validate,
};

/// Run one contact-form submission end-to-end.
///
/// `submitted_at` is the application clock reading taken when the request
/// arrived. Returns the stored message, whose `notification_sent` carries
/// the delivery outcome.
pub async fn submit<S, N>(
  store: &S,
  notifier: &N,
  name: &str,
  email: &str,
  body: &str,
  submitted_at: NaiveDateTime,
) -> Result<Message, SubmitError>
where
  S: MessageStore,
  N: Notifier,
{
  let submission = validate(name, email, body).inspect_err(|e| {
    tracing::info!(error = %e, "rejected submission");
  })?;

  let notification_sent = notifier.notify(&submission, submitted_at).await;
  if !notification_sent {
    tracing::warn!(email = submission.email(), "notification not sent");
  }

  let message = store
    .append(NewMessage::new(submission, submitted_at, notification_sent))
    .await
    .map_err(|e| SubmitError::Storage(Box::new(e)))?;

  tracing::info!(
    id = message.id,
    email_sent = message.notification_sent,
    "stored message"
  );
  Ok(message)
}
