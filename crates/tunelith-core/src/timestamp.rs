//! The textual timestamp format used at the HTTP boundary.
//!
//! Both message timestamps are structured `chrono` values internally and are
//! only rendered as `YYYY-MM-DD HH:MM:SS` when serialised.

use chrono::{DateTime, NaiveDateTime, Utc};

/// `strftime` pattern for every timestamp shown to users or API clients.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_naive(dt: &NaiveDateTime) -> String { dt.format(FORMAT).to_string() }

pub fn parse_naive(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
  NaiveDateTime::parse_from_str(s, FORMAT)
}

pub fn format_utc(dt: &DateTime<Utc>) -> String { dt.format(FORMAT).to_string() }

/// Serde adapter for `NaiveDateTime` fields.
pub mod naive {
  use chrono::NaiveDateTime;
  use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

  pub fn serialize<S: Serializer>(
    dt: &NaiveDateTime,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&super::format_naive(dt))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<NaiveDateTime, D::Error> {
    let s = String::deserialize(deserializer)?;
    super::parse_naive(&s).map_err(D::Error::custom)
  }
}

/// Serde adapter for `DateTime<Utc>` fields, rendered without an offset.
pub mod utc {
  use chrono::{DateTime, Utc};
  use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

  pub fn serialize<S: Serializer>(
    dt: &DateTime<Utc>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&super::format_utc(dt))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<DateTime<Utc>, D::Error> {
    let s = String::deserialize(deserializer)?;
    super::parse_naive(&s)
      .map(|naive| naive.and_utc())
      .map_err(D::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn naive_format_has_second_resolution() {
    let dt = parse_naive("2024-01-01 10:00:00").unwrap();
    assert_eq!(format_naive(&dt), "2024-01-01 10:00:00");
  }

  #[test]
  fn rejects_iso_t_separator() {
    assert!(parse_naive("2024-01-01T10:00:00").is_err());
  }
}
