//! Error type for `tunelith-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The database file could not be opened, initialised, read or written
  /// (missing directory, permissions, disk full, ...).
  #[error("storage unavailable: {0}")]
  Unavailable(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
