//! The persistent record store — CRUD and ordered scans over the `servers`
//! table.
//!
//! Every operation opens its own scoped connection via [`crate::db`], uses it,
//! and releases it on return (including the error paths, via drop). Nothing
//! here holds the database open across calls; see the module docs on
//! [`crate::db`] for why.

pub mod search;
pub mod types;

use std::path::{Path, PathBuf};

use rusqlite::{params, OptionalExtension};
use thiserror::Error;
use tracing::warn;

pub use types::Server;

/// Failures surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The alias has no record. Recoverable: the dispatcher falls back to a
    /// substring search before giving up.
    #[error("alias '{0}' not found")]
    NotFound(String),

    /// The database could not be opened, read, or written. Fatal.
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The store directory could not be created. Fatal.
    #[error("failed to prepare store directory: {0}")]
    Io(#[from] std::io::Error),

    /// The stored bytes for an alias are not a valid record.
    #[error("stored record for '{alias}' is corrupt: {source}")]
    Decode {
        alias: String,
        source: serde_json::Error,
    },
}

/// Handle to the on-disk store. Holds only the path; connections are opened
/// per call.
#[derive(Debug, Clone)]
pub struct ServerStore {
    path: PathBuf,
}

impl ServerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a record under its alias, overwriting any existing record for
    /// that alias. There is no existence check: last write wins.
    pub fn put(&self, server: &Server) -> Result<(), StoreError> {
        let conn = crate::db::open_database(&self.path)?;
        let encoded = serde_json::to_string(server).map_err(|source| StoreError::Decode {
            alias: server.alias.clone(),
            source,
        })?;
        conn.execute(
            "INSERT INTO servers (alias, record) VALUES (?1, ?2)
             ON CONFLICT(alias) DO UPDATE SET record = excluded.record",
            params![server.alias, encoded],
        )?;
        Ok(())
    }

    /// Exact-key lookup.
    pub fn get(&self, alias: &str) -> Result<Server, StoreError> {
        let conn = crate::db::open_database(&self.path)?;
        let encoded: Option<String> = conn
            .query_row(
                "SELECT record FROM servers WHERE alias = ?1",
                params![alias],
                |row| row.get(0),
            )
            .optional()?;

        match encoded {
            Some(encoded) => decode_record(alias, &encoded),
            None => Err(StoreError::NotFound(alias.to_string())),
        }
    }

    /// Remove the record for an alias. Deleting an absent alias is a no-op,
    /// not an error — callers that care must `get` first.
    pub fn delete(&self, alias: &str) -> Result<(), StoreError> {
        let conn = crate::db::open_database(&self.path)?;
        conn.execute("DELETE FROM servers WHERE alias = ?1", params![alias])?;
        Ok(())
    }

    /// Full scan in lexicographic alias order. A fresh scan on every call.
    ///
    /// A record that fails to decode is skipped with a warning rather than
    /// aborting the scan, so one corrupt row cannot hide the rest.
    pub fn list_all(&self) -> Result<Vec<Server>, StoreError> {
        let conn = crate::db::open_database(&self.path)?;
        let mut stmt = conn.prepare("SELECT alias, record FROM servers ORDER BY alias")?;
        let rows: Vec<(String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut servers = Vec::with_capacity(rows.len());
        for (alias, encoded) in rows {
            match decode_record(&alias, &encoded) {
                Ok(server) => servers.push(server),
                Err(err) => warn!(alias, %err, "skipping corrupt record"),
            }
        }
        Ok(servers)
    }

    /// All records whose alias, hostname, or notes contain `query`,
    /// case-insensitively, in scan order. Zero matches is a valid result.
    pub fn search(&self, query: &str) -> Result<Vec<Server>, StoreError> {
        let servers = self.list_all()?;
        Ok(servers
            .into_iter()
            .filter(|s| search::matches(s, query))
            .collect())
    }
}

fn decode_record(alias: &str, encoded: &str) -> Result<Server, StoreError> {
    serde_json::from_str(encoded).map_err(|source| StoreError::Decode {
        alias: alias.to_string(),
        source,
    })
}
