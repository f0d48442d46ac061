//! Core types and trait definitions for the Tunelith contact inbox.
//!
//! This crate is deliberately free of HTTP, database and SMTP dependencies.
//! Storage backends and notifiers implement the traits defined here; the
//! submission pipeline is written against those traits only.

pub mod error;
pub mod html;
pub mod message;
pub mod notify;
pub mod pipeline;
pub mod store;
pub mod timestamp;
pub mod validate;

pub use error::{Field, SubmitError, ValidationError};
pub use message::{Message, NewMessage, Submission};
pub use notify::Notifier;
pub use pipeline::submit;
pub use store::MessageStore;
pub use validate::validate;
