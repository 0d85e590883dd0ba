mod cli;
mod config;
mod db;
mod render;
mod session;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "berth", version, about = "SSH connection bookmark manager")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a server bookmark (prompts for fields not given)
    Add {
        alias: Option<String>,
        hostname: Option<String>,
        /// Run this command on the remote host instead of opening a shell
        #[arg(long)]
        run: Option<String>,
    },
    /// List all bookmarks
    List,
    /// Delete a bookmark by alias
    Delete { alias: String },
    /// Search bookmarks by substring (alias, hostname, or notes)
    Search { query: String },
    /// Edit a bookmark's notes in $EDITOR
    Note { alias: String },
    /// Connect by alias, search match, or raw hostname
    Ssh { target: String },
}

fn main() {
    // The single place that decides process exit codes. Everything below
    // returns errors instead of exiting.
    if let Err(err) = run() {
        eprintln!("{}", style(format!("error: {err:#}")).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::BerthConfig::load()?;

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Add {
            alias,
            hostname,
            run,
        } => cli::add::add(&config, alias, hostname, run),
        Command::List => cli::list::list(&config),
        Command::Delete { alias } => cli::delete::delete(&config, &alias),
        Command::Search { query } => cli::search::search(&config, &query),
        Command::Note { alias } => cli::note::note(&config, &alias),
        Command::Ssh { target } => cli::ssh::ssh(&config, &target),
    }
}
