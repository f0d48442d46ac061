//! The `Notifier` trait.

use std::future::Future;

use chrono::NaiveDateTime;

use crate::message::Submission;

/// Delivers the administrative notification for a new submission.
///
/// Implementations make at most one delivery attempt and never fail upward:
/// every failure is reported as `false`.
pub trait Notifier: Send + Sync {
  fn notify<'a>(
    &'a self,
    submission: &'a Submission,
    submitted_at: NaiveDateTime,
  ) -> impl Future<Output = bool> + Send + 'a;
}
