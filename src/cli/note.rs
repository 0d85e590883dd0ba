use anyhow::Result;

use crate::cli::editor;
use crate::config::BerthConfig;
use crate::store::ServerStore;

/// Round-trip a bookmark's notes through the external editor. The record is
/// rewritten only when the text actually changed.
pub fn note(config: &BerthConfig, alias: &str) -> Result<()> {
    let store = ServerStore::new(config.resolved_db_path());
    let mut server = store.get(alias)?;

    let edited = editor::edit_text(&server.notes)?;
    if edited == server.notes {
        println!("Notes unchanged.");
        return Ok(());
    }

    server.notes = edited;
    store.put(&server)?;
    println!("Notes updated for '{alias}'.");
    Ok(())
}
