//! Formatting a submission as a notification email.

use chrono::NaiveDateTime;
use lettre::{
  Message,
  message::{Mailbox, header::ContentType},
};
use tunelith_core::{Submission, html, timestamp};

use crate::{Result, settings::MailSettings};

pub fn subject(submission: &Submission) -> String {
  format!("New contact message - {}", submission.name())
}

/// The HTML body of the notification. Every user-supplied value is escaped.
pub fn render_body(submission: &Submission, submitted_at: NaiveDateTime) -> String {
  format!(
    r#"<html>
<body style="font-family: Arial, sans-serif;">
<div style="max-width: 600px; margin: 0 auto; padding: 20px;">
<h2>New contact message</h2>
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Date:</strong> {date}</p>
<div style="background: #e3f2fd; padding: 15px; border-radius: 5px;">
<strong>Message:</strong><br>
{body}
</div>
</div>
</body>
</html>
"#,
    name = html::escape(submission.name()),
    email = html::escape(submission.email()),
    date = timestamp::format_naive(&submitted_at),
    body = html::escape_multiline(submission.body()),
  )
}

/// Build the email sent from the relay account to the administrator.
pub fn compose(
  settings: &MailSettings,
  submission: &Submission,
  submitted_at: NaiveDateTime,
) -> Result<Message> {
  let from: Mailbox = settings.username.parse()?;
  let to: Mailbox = settings.recipient.parse()?;

  Ok(
    Message::builder()
      .from(from)
      .to(to)
      .subject(subject(submission))
      .header(ContentType::TEXT_HTML)
      .body(render_body(submission, submitted_at))?,
  )
}

#[cfg(test)]
mod tests {
  use tunelith_core::validate;

  use super::*;
  use crate::NotifyError;

  fn settings() -> MailSettings {
    MailSettings {
      username: "bot@example.com".into(),
      password: "secret".into(),
      recipient: "admin@example.com".into(),
      ..Default::default()
    }
  }

  fn at() -> NaiveDateTime { timestamp::parse_naive("2024-01-01 10:00:00").unwrap() }

  #[test]
  fn body_escapes_and_breaks_lines() {
    let s = validate("<Ana>", "a@b.com", "Hello\nWorld & co").unwrap();
    let body = render_body(&s, at());
    assert!(body.contains("&lt;Ana&gt;"), "{body}");
    assert!(body.contains("Hello<br>\nWorld &amp; co"), "{body}");
    assert!(body.contains("2024-01-01 10:00:00"), "{body}");
  }

  #[test]
  fn addresses_admin_from_relay_account() {
    let s = validate("Ana", "a@b.com", "Hello").unwrap();
    let email = compose(&settings(), &s, at()).unwrap();
    let raw = String::from_utf8(email.formatted()).unwrap();
    assert!(raw.contains("From: bot@example.com"), "{raw}");
    assert!(raw.contains("To: admin@example.com"), "{raw}");
    assert!(raw.contains("Subject: New contact message - Ana"), "{raw}");
  }

  #[test]
  fn malformed_recipient_is_rejected() {
    let s = validate("Ana", "a@b.com", "Hello").unwrap();
    let bad = MailSettings { recipient: "not an address".into(), ..settings() };
    assert!(matches!(
      compose(&bad, &s, at()),
      Err(NotifyError::InvalidAddress(_))
    ));
  }
}
