use clap::Parser;
use std::path::PathBuf;

/// Collect bids from the terminal and keep them in a local SQLite file
#[derive(Parser, Debug, Clone)]
#[command(name = "bidbook", version)]
pub struct Opts {
    /// Path of the bid database file
    #[arg(long, env = "BIDBOOK_DB", default_value = "bids.db")]
    pub db: PathBuf,

    /// Log filter, in `tracing_subscriber::EnvFilter` syntax
    #[arg(long, env = "BIDBOOK_LOG", default_value = "info")]
    pub log: String,
}
