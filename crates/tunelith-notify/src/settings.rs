//! Mail relay settings.

use std::fmt;

use lettre::transport::smtp::authentication::Credentials;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Everything the notifier needs to reach the relay and the administrator.
///
/// Built once at startup from the server configuration; nothing here is read
/// from the process environment.
#[derive(Clone)]
pub struct MailSettings {
  pub smtp_host:  String,
  pub smtp_port:  u16,
  /// Relay account; also used as the `From` address.
  pub username:   String,
  pub password:   String,
  /// The fixed recipient of every notification.
  pub recipient:  String,
}

impl MailSettings {
  /// `true` when account, credential and recipient are all present.
  pub fn is_configured(&self) -> bool {
    !self.username.is_empty() && !self.password.is_empty() && !self.recipient.is_empty()
  }

  pub(crate) fn credentials(&self) -> Option<Credentials> {
    self
      .is_configured()
      .then(|| Credentials::new(self.username.clone(), self.password.clone()))
  }
}

impl Default for MailSettings {
  fn default() -> Self {
    Self {
      smtp_host: DEFAULT_SMTP_HOST.to_owned(),
      smtp_port: DEFAULT_SMTP_PORT,
      username:  String::new(),
      password:  String::new(),
      recipient: String::new(),
    }
  }
}

impl fmt::Debug for MailSettings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MailSettings")
      .field("smtp_host", &self.smtp_host)
      .field("smtp_port", &self.smtp_port)
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .field("recipient", &self.recipient)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn configured() -> MailSettings {
    MailSettings {
      username: "bot@example.com".into(),
      password: "hunter2".into(),
      recipient: "admin@example.com".into(),
      ..Default::default()
    }
  }

  #[test]
  fn any_missing_piece_means_unconfigured() {
    assert!(configured().is_configured());
    assert!(!MailSettings::default().is_configured());
    assert!(!MailSettings { password: String::new(), ..configured() }.is_configured());
    assert!(!MailSettings { recipient: String::new(), ..configured() }.is_configured());
    assert!(MailSettings::default().credentials().is_none());
  }

  #[test]
  fn debug_hides_password() {
    let out = format!("{:?}", configured());
    assert!(!out.contains("hunter2"), "{out}");
  }
}
