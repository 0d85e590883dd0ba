use anyhow::Result;
use tracing::debug;

use crate::config::BerthConfig;
use crate::render;
use crate::session::Launcher;
use crate::store::{Server, ServerStore, StoreError};

/// Resolve the target to a single record, show its notes, and run the
/// session until it ends cleanly.
pub fn ssh(config: &BerthConfig, target: &str) -> Result<()> {
    let store = ServerStore::new(config.resolved_db_path());
    let server = resolve_target(&store, target)?;

    if !server.notes.is_empty() {
        render::notes(&server);
    }

    let launcher = Launcher::new(&config.ssh.binary);
    launcher.connect(&server)?;
    Ok(())
}

/// Exact alias match first, then substring search, then a raw-hostname
/// fallback. An ambiguous search warns and takes the first match in scan
/// order rather than halting.
///
/// Records resolved through the store get their hit count bumped before the
/// session starts. The bump is a snapshot read-modify-write; a concurrent
/// invocation can lose an increment. Best-effort counting, by design.
fn resolve_target(store: &ServerStore, target: &str) -> Result<Server> {
    match store.get(target) {
        Ok(server) => record_hit(store, server),
        Err(StoreError::NotFound(_)) => {
            let matches = store.search(target)?;
            if matches.is_empty() {
                debug!(target, "nothing matched; treating target as a raw hostname");
                return Ok(Server::direct(target));
            }
            if matches.len() > 1 {
                render::warn(&format!(
                    "'{target}' is ambiguous ({} matches); connecting to the first:",
                    matches.len()
                ));
                render::server_table(&matches, Some(target));
            }
            let first = matches.into_iter().next().expect("matches is non-empty");
            record_hit(store, first)
        }
        Err(err) => Err(err.into()),
    }
}

fn record_hit(store: &ServerStore, mut server: Server) -> Result<Server> {
    server.hit_count += 1;
    store.put(&server)?;
    Ok(server)
}
