use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::config::BerthConfig;
use crate::store::{Server, ServerStore};

/// Add a bookmark, prompting for any field not given on the command line.
/// Adding an alias that already exists overwrites it: last write wins.
pub fn add(
    config: &BerthConfig,
    alias: Option<String>,
    hostname: Option<String>,
    run_cmd: Option<String>,
) -> Result<()> {
    let alias = match alias {
        Some(alias) => alias,
        None => prompt("Alias: ")?,
    };
    let hostname = match hostname {
        Some(hostname) => hostname,
        None => prompt("Hostname/IP: ")?,
    };

    let mut server = Server::new(&alias, hostname);
    server.run_cmd = run_cmd;

    let store = ServerStore::new(config.resolved_db_path());
    store.put(&server)?;
    println!("Added '{alias}'.");
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
