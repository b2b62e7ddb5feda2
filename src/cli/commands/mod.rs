pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod items;
pub mod late;
pub mod ledger;
pub mod stats;
pub mod users;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::config::session::{FileStore, FilterStore, MemoryStore};
use crate::errors::AppResult;
use crate::models::Snapshot;
use crate::utils::date;
use chrono::NaiveDate;

/// Snapshot named by the configuration (already overridden by `--data`).
pub(crate) fn load_snapshot(cfg: &Config) -> AppResult<Snapshot> {
    Snapshot::load(&cfg.snapshot_path())
}

pub(crate) fn reference_date(cli: &Cli) -> AppResult<NaiveDate> {
    date::resolve_today(&cli.today)
}

/// Session file in normal mode, throwaway store under `--test`.
pub(crate) fn open_store(cli: &Cli) -> Box<dyn FilterStore> {
    if cli.test {
        Box::new(MemoryStore::default())
    } else {
        Box::new(FileStore::new(Config::session_file()))
    }
}
