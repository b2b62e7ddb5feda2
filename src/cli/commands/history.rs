use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::ViewFilterEngine;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};

use super::{load_snapshot, reference_date};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::History { user } = &cli.command {
        let snapshot = load_snapshot(cfg)?;
        let member = snapshot.user(*user).ok_or(AppError::UnknownUser(*user))?;
        let engine = ViewFilterEngine::new(&snapshot, reference_date(cli)?);
        let months = engine.history(*user);

        header(&member.name);

        if months.is_empty() {
            info("Pas d'historique");
            return Ok(());
        }

        for month in &months {
            println!("{}", month.label());
            for loan in &month.loans {
                println!(
                    "  {} → {}  {}",
                    loan.start,
                    loan.stop,
                    snapshot.item_name(loan.item)
                );
            }
        }
    }
    Ok(())
}
