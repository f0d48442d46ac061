//! Message types: the one entity the inbox stores.
//!
//! A message is an immutable record of a single contact-form submission.
//! Messages are never updated or deleted once written.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

// ─── Submission ──────────────────────────────────────────────────────────────

/// A validated, trimmed contact-form payload.
///
/// Only [`crate::validate`] constructs one, so every `Submission` in the
/// program has three non-empty fields and a plausibly shaped email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
  pub(crate) name:  String,
  pub(crate) email: String,
  pub(crate) body:  String,
}

impl Submission {
  pub fn name(&self) -> &str { &self.name }

  pub fn email(&self) -> &str { &self.email }

  pub fn body(&self) -> &str { &self.body }
}

// ─── NewMessage ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::MessageStore::append`].
/// `id` and `stored_at` are always set by the store; they are not accepted
/// from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
  pub name:              String,
  pub email:             String,
  pub body:              String,
  pub submitted_at:      NaiveDateTime,
  pub notification_sent: bool,
}

impl NewMessage {
  pub fn new(
    submission: Submission,
    submitted_at: NaiveDateTime,
    notification_sent: bool,
  ) -> Self {
    Self {
      name: submission.name,
      email: submission.email,
      body: submission.body,
      submitted_at,
      notification_sent,
    }
  }
}

// ─── Message ─────────────────────────────────────────────────────────────────

/// A stored submission. Once written, no field is ever updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  /// Store-assigned; strictly increasing in creation order.
  pub id:                i64,
  pub name:              String,
  pub email:             String,
  /// Free text; may contain line breaks.
  pub body:              String,
  /// Application clock at request time, second resolution.
  #[serde(with = "timestamp::naive")]
  pub submitted_at:      NaiveDateTime,
  /// Outcome of the single notification attempt made at creation.
  pub notification_sent: bool,
  /// Server-assigned at insertion.
  #[serde(with = "timestamp::utc")]
  pub stored_at:         DateTime<Utc>,
}
