//! Core record type definitions.
//!
//! Defines [`Server`], the persisted bookmark entry keyed by alias.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A server bookmark, matching the JSON shape stored in the `servers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Unique short name; acts as the store key.
    pub alias: String,
    /// Connection target. May embed a user as `user@host` and a port as
    /// `host:port` (parsed at connect time, not at add time).
    pub hostname: String,
    /// Free-text notes, shown before connecting and editable via `berth note`.
    #[serde(default)]
    pub notes: String,
    /// Labels attached to the record. Persisted for forward compatibility;
    /// no operation consumes these yet.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Number of times this record was dispatched through `berth ssh`.
    /// Never reset.
    #[serde(default)]
    pub hit_count: u64,
    /// When set, run this command on the remote host instead of opening an
    /// interactive shell.
    #[serde(default)]
    pub run_cmd: Option<String>,
}

impl Server {
    /// A new bookmark with just an alias and hostname.
    pub fn new(alias: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            hostname: hostname.into(),
            notes: String::new(),
            tags: BTreeSet::new(),
            hit_count: 0,
            run_cmd: None,
        }
    }

    /// An unsaved record wrapping a raw hostname, used when an ssh target
    /// matches nothing in the store.
    pub fn direct(hostname: impl Into<String>) -> Self {
        Self::new(String::new(), hostname)
    }
}
