//! Local key-value persistence adapter.
//!
//! Stores JSON snapshots of application state under string keys, scoped to
//! one database file. Mirrors the contract the dashboard UI relies on:
//! `save` reports failure as `false` instead of raising, and `load` falls
//! back to a caller-supplied default when the key is absent or the stored
//! text is malformed. Callers must check the boolean from `save`.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{open_database, open_memory_database, DatabaseError};

/// Durable key-value store holding serialized state snapshots.
///
/// Holds no live ownership of application state — only the serialized
/// snapshots written through `save`.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        let conn = open_database(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = open_memory_database()?;
        Ok(Self { conn })
    }

    /// Serialize `value` and write it under `key` (upsert).
    ///
    /// Returns `false` on any serialization or storage failure. Failures
    /// are logged and swallowed, never propagated.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize value for key '{key}': {e}");
                return false;
            }
        };

        let result = self.conn.execute(
            "INSERT INTO local_store (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, json],
        );

        match result {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Failed to write key '{key}' to local store: {e}");
                false
            }
        }
    }

    /// Read and deserialize the value at `key`.
    ///
    /// Returns `default` when the key is absent, the stored value is
    /// malformed, or the store is unavailable. Malformed persisted data is
    /// treated as absence, not as an error.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let row: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM local_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
        {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!("Failed to read key '{key}' from local store: {e}");
                return default;
            }
        };

        match row {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("Malformed stored value for key '{key}': {e}");
                default
            }),
            None => default,
        }
    }

    /// Delete `key` from the store. Same swallow-and-report contract as `save`.
    pub fn remove(&self, key: &str) -> bool {
        match self
            .conn
            .execute("DELETE FROM local_store WHERE key = ?1", [key])
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Failed to remove key '{key}' from local store: {e}");
                false
            }
        }
    }

    /// Whether a key currently exists in the store.
    pub fn contains(&self, key: &str) -> bool {
        self.conn
            .query_row(
                "SELECT 1 FROM local_store WHERE key = ?1",
                [key],
                |_| Ok(()),
            )
            .optional()
            .map(|row| row.is_some())
            .unwrap_or(false)
    }

    /// Drop the backing table so every subsequent operation fails. Test
    /// seam for exercising the swallow-and-report contract.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        self.conn
            .execute_batch("DROP TABLE local_store")
            .expect("drop local_store");
    }

    /// Write a raw (possibly non-JSON) string under `key`. Test seam for
    /// exercising the malformed-data fallback; not part of the adapter
    /// contract.
    #[cfg(test)]
    pub(crate) fn save_raw(&self, key: &str, raw: &str) {
        self.conn
            .execute(
                "INSERT INTO local_store (key, value, updated_at)
                 VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
                params![key, raw],
            )
            .expect("raw write");
    }
}
