//! [`SqliteStore`] — the SQLite implementation of [`MessageStore`].

use std::path::Path;

use chrono::Utc;
use tunelith_core::{Message, MessageStore, NewMessage};

use crate::{
  Error, Result,
  encode::{RawMessage, decode_dt, encode_dt, encode_naive},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A message store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// Fails with [`Error::Unavailable`] if the file cannot be opened or the
  /// schema cannot be written; nothing is retried later.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path.as_ref()).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.as_ref().display(), "opened message store");
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Create the `messages` table if it does not exist yet. Calling this on an
  /// initialised store is a no-op.
  pub async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── MessageStore impl ───────────────────────────────────────────────────────

impl MessageStore for SqliteStore {
  type Error = Error;

  async fn append(&self, input: NewMessage) -> Result<Message> {
    let submitted_at_str = encode_naive(&input.submitted_at);
    let NewMessage { name, email, body, submitted_at, notification_sent } = input;

    let (id, stored_at_str, name, email, body) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        // Never older than the newest row, so id order and stored_at order
        // agree even if the wall clock steps backwards.
        let now = encode_dt(Utc::now());
        let latest: Option<String> =
          tx.query_row("SELECT MAX(stored_at) FROM messages", [], |row| row.get(0))?;
        let stored_at_str = match latest {
          Some(latest) if latest > now => latest,
          _ => now,
        };

        tx.execute(
          "INSERT INTO messages (
             name, email, body, submitted_at, notification_sent, stored_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            name,
            email,
            body,
            submitted_at_str,
            notification_sent,
            stored_at_str,
          ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok((id, stored_at_str, name, email, body))
      })
      .await?;

    Ok(Message {
      id,
      name,
      email,
      body,
      submitted_at,
      notification_sent,
      // Decoded from the persisted text so the returned value is exactly
      // what `list_all` reads back.
      stored_at: decode_dt(&stored_at_str)?,
    })
  }

  async fn list_all(&self) -> Result<Vec<Message>> {
    let raws: Vec<RawMessage> = self
      .conn
      .call(|conn| {
        let sql = format!(
          "SELECT {} FROM messages ORDER BY stored_at DESC, id DESC",
          RawMessage::COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawMessage::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawMessage::into_message).collect()
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?)
      })
      .await?;
    Ok(n.max(0) as u64)
  }
}
