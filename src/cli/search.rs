use anyhow::Result;

use crate::config::BerthConfig;
use crate::render;
use crate::store::ServerStore;

/// Substring search across alias, hostname, and notes, with the match
/// highlighted in the output.
pub fn search(config: &BerthConfig, query: &str) -> Result<()> {
    let store = ServerStore::new(config.resolved_db_path());
    let matches = store.search(query)?;

    if matches.is_empty() {
        render::warn("No matches.");
        return Ok(());
    }
    render::server_table(&matches, Some(query));
    Ok(())
}
