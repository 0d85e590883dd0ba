use anyhow::Result;

use crate::config::BerthConfig;
use crate::render;
use crate::store::ServerStore;

/// List every bookmark in alias order.
pub fn list(config: &BerthConfig) -> Result<()> {
    let store = ServerStore::new(config.resolved_db_path());
    let servers = store.list_all()?;

    if servers.is_empty() {
        render::warn("No servers yet. Add one with 'berth add'.");
        return Ok(());
    }
    render::server_table(&servers, None);
    Ok(())
}
