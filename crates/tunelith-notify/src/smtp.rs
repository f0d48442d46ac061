//! [`SmtpNotifier`] — delivers notifications through an SMTP relay.

use chrono::NaiveDateTime;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tunelith_core::{Notifier, Submission};

use crate::{NotifyError, Result, compose::compose, settings::MailSettings};

/// Sends one HTML email per submission to the configured administrator.
#[derive(Clone, Debug)]
pub struct SmtpNotifier {
  settings: MailSettings,
}

impl SmtpNotifier {
  pub fn new(settings: MailSettings) -> Self { Self { settings } }

  /// Make exactly one delivery attempt.
  ///
  /// Returns [`NotifyError::MissingCredentials`] before touching the network
  /// when the settings are incomplete.
  pub async fn deliver(
    &self,
    submission: &Submission,
    submitted_at: NaiveDateTime,
  ) -> Result<()> {
    let credentials = self
      .settings
      .credentials()
      .ok_or(NotifyError::MissingCredentials)?;
    let email = compose(&self.settings, submission, submitted_at)?;

    let transport =
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.smtp_host)?
        .port(self.settings.smtp_port)
        .credentials(credentials)
        .build();

    let response = transport.send(email).await?;
    if response.is_positive() {
      Ok(())
    } else {
      Err(NotifyError::Rejected(response.code().to_string()))
    }
  }
}

impl Notifier for SmtpNotifier {
  async fn notify(&self, submission: &Submission, submitted_at: NaiveDateTime) -> bool {
    match self.deliver(submission, submitted_at).await {
      Ok(()) => {
        tracing::info!(to = %self.settings.recipient, "notification sent");
        true
      }
      Err(NotifyError::MissingCredentials) => {
        tracing::warn!("mail configuration missing, notification not sent");
        false
      }
      Err(e) => {
        tracing::warn!(error = %e, "notification failed");
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use tunelith_core::{timestamp::parse_naive, validate};

  use super::*;

  fn at() -> NaiveDateTime { parse_naive("2024-01-01 10:00:00").unwrap() }

  #[tokio::test]
  async fn unconfigured_short_circuits_to_false() {
    // Unroutable host: reaching the network would hang or fail slowly, so a
    // prompt `false` shows no connection was attempted.
    let notifier = SmtpNotifier::new(MailSettings {
      smtp_host: "192.0.2.1".into(),
      ..Default::default()
    });
    let s = validate("Ana", "a@b.com", "Hello").unwrap();

    let sent = tokio::time::timeout(Duration::from_secs(1), notifier.notify(&s, at()))
      .await
      .expect("no network round-trip");
    assert!(!sent);
    assert!(matches!(
      notifier.deliver(&s, at()).await,
      Err(NotifyError::MissingCredentials)
    ));
  }

  #[tokio::test]
  async fn malformed_address_fails_before_connecting() {
    let notifier = SmtpNotifier::new(MailSettings {
      smtp_host: "192.0.2.1".into(),
      username: "bot@example.com".into(),
      password: "secret".into(),
      recipient: "admin at example dot com".into(),
      ..Default::default()
    });
    let s = validate("Ana", "a@b.com", "Hello").unwrap();

    let sent = tokio::time::timeout(Duration::from_secs(1), notifier.notify(&s, at()))
      .await
      .expect("no network round-trip");
    assert!(!sent);
  }
}
