//! Error type for `tunelith-notify`.
//!
//! These errors never leave the crate through [`tunelith_core::Notifier`];
//! they exist so delivery failures can be logged precisely.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
  #[error("mail credentials are not configured")]
  MissingCredentials,

  #[error("invalid email address: {0}")]
  InvalidAddress(#[from] lettre::address::AddressError),

  #[error("failed to build message: {0}")]
  Build(#[from] lettre::error::Error),

  #[error("SMTP error: {0}")]
  Smtp(#[from] lettre::transport::smtp::Error),

  #[error("relay rejected the message with code {0}")]
  Rejected(String),
}

pub type Result<T, E = NotifyError> = std::result::Result<T, E>;
