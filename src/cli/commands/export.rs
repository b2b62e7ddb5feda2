use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::ViewFilterEngine;
use crate::export::ExportLogic;
use crate::errors::AppResult;

use super::{load_snapshot, open_store, reference_date};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        view,
        format,
        file,
        force,
    } = &cli.command
    {
        // Lists are exported with the remembered filters.
        let session = open_store(cli).load()?;
        let (item_filters, user_filters) = match session {
            Some(s) => (s.items, s.users),
            None => (cfg.default_item_filters.clone(), Default::default()),
        };

        let snapshot = load_snapshot(cfg)?;
        let engine = ViewFilterEngine::new(&snapshot, reference_date(cli)?);
        ExportLogic::export(
            &engine,
            *view,
            &item_filters,
            &user_filters,
            *format,
            file,
            *force,
        )?;
    }
    Ok(())
}
