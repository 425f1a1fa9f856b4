use anyhow::{Context, Result};
use bidbook::{
    config::Opts,
    display::LinePrinter,
    session::run_session,
    store::{BidStore, SqliteBidStore},
    BidController,
};
use clap::Parser;
use std::{io, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&opts.log)
                .with_context(|| format!("invalid log filter: {}", opts.log))?,
        )
        .with_writer(io::stderr)
        .init();

    let store = SqliteBidStore::open(&opts.db)
        .with_context(|| format!("Failed to open bid store {}", opts.db.display()))?;
    store.initialize().context("Failed to initialize bid store")?;

    let mut controller = BidController::new(Arc::new(store));
    controller.register_listener(Arc::new(LinePrinter::new(io::stdout())));

    let replayed = controller.replay_all().context("Failed to load stored bids")?;
    info!(replayed, db = %opts.db.display(), "bid book ready");

    let accepted = run_session(&controller, io::stdin().lock(), io::stdout())?;
    info!(accepted, "session finished");

    Ok(())
}
