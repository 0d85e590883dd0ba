//! Terminal output: status lines, warnings, notes, and the server table.
//!
//! Thin display glue over [`console`]; styling is skipped automatically when
//! stdout is not a terminal.

use console::style;

use crate::store::Server;

/// A green one-line status ("Connected.").
pub fn status(message: &str) {
    println!("{}", style(message).green());
}

/// A yellow warning that does not halt anything.
pub fn warn(message: &str) {
    eprintln!("{}", style(message).yellow());
}

/// Show a record's notes before connecting.
pub fn notes(server: &Server) {
    println!("{}", style(format!("── {} ──", server.alias)).dim());
    println!("{}", server.notes.trim_end());
    println!("{}", style("──").dim());
}

/// Render servers as an aligned table, optionally highlighting a matched
/// substring in alias and hostname.
pub fn server_table(servers: &[Server], highlight: Option<&str>) {
    let alias_width = servers
        .iter()
        .map(|s| s.alias.len())
        .chain(std::iter::once("Alias".len()))
        .max()
        .unwrap_or(0);
    let host_width = servers
        .iter()
        .map(|s| s.hostname.len())
        .chain(std::iter::once("Hostname".len()))
        .max()
        .unwrap_or(0);

    println!(
        "{}",
        style(format!(
            "{:<alias_width$}  {:<host_width$}  {}",
            "Alias", "Hostname", "Hits"
        ))
        .bold()
    );
    for server in servers {
        let alias = pad_highlighted(&server.alias, alias_width, highlight);
        let hostname = pad_highlighted(&server.hostname, host_width, highlight);
        println!("{alias}  {hostname}  {}", server.hit_count);
    }
}

/// Pad to `width` display columns, then wrap the first case-insensitive
/// occurrence of `highlight` in yellow. Styling is applied after padding so
/// escape codes never throw off the column math.
fn pad_highlighted(text: &str, width: usize, highlight: Option<&str>) -> String {
    let padded = format!("{text:<width$}");
    match highlight {
        Some(query) if !query.is_empty() => highlight_match(&padded, query),
        _ => padded,
    }
}

fn highlight_match(text: &str, query: &str) -> String {
    let lower = text.to_lowercase();
    // Case folding can shift byte offsets in non-ASCII text; skip the
    // highlight rather than slice off a char boundary.
    if lower.len() != text.len() || query.len() != query.to_lowercase().len() {
        return text.to_string();
    }
    let Some(start) = lower.find(&query.to_lowercase()) else {
        return text.to_string();
    };
    let end = start + query.len();
    format!(
        "{}{}{}",
        &text[..start],
        style(&text[start..end]).yellow(),
        &text[end..]
    )
}
