use anyhow::Result;

use crate::config::BerthConfig;
use crate::store::ServerStore;

/// Remove a bookmark. Deleting an alias that does not exist is accepted
/// silently; the store makes no existence check.
pub fn delete(config: &BerthConfig, alias: &str) -> Result<()> {
    let store = ServerStore::new(config.resolved_db_path());
    store.delete(alias)?;
    println!("Removed '{alias}'.");
    Ok(())
}
