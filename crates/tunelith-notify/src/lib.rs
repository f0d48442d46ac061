//! Email notification for new contact messages.
//!
//! A thin layer over [lettre](https://lettre.rs): [`compose`] turns a
//! submission into an HTML email addressed to the administrator, and
//! [`SmtpNotifier`] delivers it through an authenticated STARTTLS relay.
//!
//! Delivery is attempted at most once per message. Every failure, including
//! missing credentials, is logged and reported as `false` through
//! [`tunelith_core::Notifier`].

mod compose;
mod smtp;

pub mod error;
pub mod settings;

pub use compose::{compose, render_body, subject};
pub use error::{NotifyError, Result};
pub use settings::MailSettings;
pub use smtp::SmtpNotifier;
