mod config;
mod export;
mod ledger;
mod logging;
mod models;
mod run;
mod storage;
mod summary;
mod ui;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::ledger::TransactionStore;
use crate::storage::SqliteStore;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_env()?;
    logging::init(&config.log_path())?;

    let db_path = config.db_path();
    let kv = SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
    let mut store = TransactionStore::load(Box::new(kv));
    tracing::info!(
        path = %db_path.display(),
        transactions = store.len(),
        "cashbook started"
    );

    if args.len() > 1 {
        run::as_cli(&args, &config, &mut store)
    } else {
        run::as_tui(config, &mut store)
    }
}
