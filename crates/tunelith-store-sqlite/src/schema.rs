//! SQL schema for the Tunelith SQLite store.
//!
//! Executed once when the store is opened. Future migrations will be gated
//! on `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Messages are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS messages (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    name              TEXT    NOT NULL,
    email             TEXT    NOT NULL,
    body              TEXT    NOT NULL,
    submitted_at      TEXT    NOT NULL,   -- 'YYYY-MM-DD HH:MM:SS', app clock
    notification_sent INTEGER NOT NULL,   -- 0 | 1
    stored_at         TEXT    NOT NULL    -- RFC 3339 UTC, fixed width
);

CREATE INDEX IF NOT EXISTS messages_stored_idx ON messages(stored_at);

PRAGMA user_version = 1;
";
