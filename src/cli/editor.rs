//! External editor round-trip for notes text.
//!
//! The text is written to a temp file, `$VISUAL`/`$EDITOR` (fallback `vi`) is
//! run on it with the terminal attached, and the file is read back after the
//! editor exits. The temp file is cleaned up on drop, including error paths.

use std::process::Command;

use anyhow::{bail, Context, Result};

/// Edit `initial` in the user's editor and return the replacement text.
pub fn edit_text(initial: &str) -> Result<String> {
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".into());

    let file = tempfile::Builder::new()
        .prefix("berth-note-")
        .suffix(".txt")
        .tempfile()
        .context("failed to create temp file for notes")?;
    std::fs::write(file.path(), initial).context("failed to write notes to temp file")?;

    let status = Command::new(&editor)
        .arg(file.path())
        .status()
        .with_context(|| format!("failed to launch editor '{editor}'"))?;
    if !status.success() {
        bail!("editor '{editor}' exited with {status}");
    }

    std::fs::read_to_string(file.path()).context("failed to read edited notes")
}
