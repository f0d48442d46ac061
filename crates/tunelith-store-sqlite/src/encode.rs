//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! `stored_at` is stored as a fixed-width RFC 3339 string (microseconds,
//! `Z` suffix) so that text ordering matches time ordering. `submitted_at`
//! keeps the boundary format `YYYY-MM-DD HH:MM:SS`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use tunelith_core::{Message, timestamp};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDateTime ───────────────────────────────────────────────────────────

pub fn encode_naive(dt: &NaiveDateTime) -> String { timestamp::format_naive(dt) }

pub fn decode_naive(s: &str) -> Result<NaiveDateTime> {
  timestamp::parse_naive(s).map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// Column values straight out of a `messages` row, before decoding.
pub struct RawMessage {
  pub id:                i64,
  pub name:              String,
  pub email:             String,
  pub body:              String,
  pub submitted_at:      String,
  pub notification_sent: bool,
  pub stored_at:         String,
}

impl RawMessage {
  /// Column list matching [`RawMessage::from_row`].
  pub const COLUMNS: &'static str =
    "id, name, email, body, submitted_at, notification_sent, stored_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                row.get(0)?,
      name:              row.get(1)?,
      email:             row.get(2)?,
      body:              row.get(3)?,
      submitted_at:      row.get(4)?,
      notification_sent: row.get(5)?,
      stored_at:         row.get(6)?,
    })
  }

  pub fn into_message(self) -> Result<Message> {
    Ok(Message {
      id:                self.id,
      name:              self.name,
      email:             self.email,
      body:              self.body,
      submitted_at:      decode_naive(&self.submitted_at)?,
      notification_sent: self.notification_sent,
      stored_at:         decode_dt(&self.stored_at)?,
    })
  }
}
