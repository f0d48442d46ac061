//! The `MessageStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `tunelith-store-sqlite`). The pipeline and the HTTP layers depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::message::{Message, NewMessage};

/// Abstraction over a message store backend.
///
/// The store is append-only: there is no update or delete operation.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait MessageStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist one message and return it with its assigned `id` and
  /// `stored_at`. A partially written message is never observable.
  fn append(
    &self,
    input: NewMessage,
  ) -> impl Future<Output = Result<Message, Self::Error>> + Send + '_;

  /// Every stored message, newest first (ties broken by `id` descending).
  ///
  /// This is a full scan; its cost grows linearly with the store.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Message>, Self::Error>> + Send + '_;

  /// Number of stored messages.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
