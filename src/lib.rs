//! SSH connection bookmarks — aliases, notes, and auto-reconnecting sessions.
//!
//! berth keeps server records (alias, hostname/port, notes, usage count,
//! optional auto-run command) in a single-file SQLite store under `~/.berth/`
//! and launches sessions through the external `ssh` client, reconnecting
//! automatically after abnormal disconnects.
//!
//! # Modules
//!
//! - [`config`] — configuration from `~/.berth/config.toml` plus env overrides
//! - [`db`] — scoped, per-operation SQLite connection handling
//! - [`store`] — the persistent record store and substring search
//! - [`session`] — ssh process launch, stderr status monitoring, retry loop
//! - [`render`] — terminal output helpers

pub mod config;
pub mod db;
pub mod render;
pub mod session;
pub mod store;
