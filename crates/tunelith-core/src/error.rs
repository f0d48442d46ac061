//! Error types for `tunelith-core`.

use std::fmt;

use thiserror::Error;

/// One of the three fields of a contact-form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  Email,
  Message,
}

impl Field {
  /// The form field name this variant is submitted under.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Name => "name",
      Self::Email => "email",
      Self::Message => "message",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A defect in user input, reported before anything is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("all fields are required (missing: {0})")]
  MissingField(Field),

  #[error("invalid email address")]
  InvalidEmailShape,
}

/// Why [`crate::submit`] did not produce a stored message.
///
/// Notification failures never appear here; they are recorded as
/// `notification_sent = false` on the stored message instead.
#[derive(Debug, Error)]
pub enum SubmitError {
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
