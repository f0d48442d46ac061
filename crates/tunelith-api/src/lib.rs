//! JSON REST API for Tunelith.
//!
//! Exposes an axum [`Router`] backed by any [`tunelith_core::MessageStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", tunelith_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod messages;

use std::sync::Arc;

use axum::{Router, routing::get};
use tunelith_core::MessageStore;

pub use error::ApiError;

/// Build the API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: MessageStore + 'static,
{
  Router::new()
    .route("/messages", get(messages::list::<S>))
    .with_state(store)
}
