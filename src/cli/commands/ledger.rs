use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::ViewFilterEngine;
use crate::errors::AppResult;
use crate::models::LedgerClass;
use crate::ui::messages::info;
use crate::utils::colors::colorize_money;
use crate::utils::date::long_date;
use crate::utils::formatting::{bold, entry_money, format_money, pad_right};

use super::{load_snapshot, reference_date};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Ledger { details } = &cli.command {
        let snapshot = load_snapshot(cfg)?;
        let engine = ViewFilterEngine::new(&snapshot, reference_date(cli)?);
        let days = engine.ledger();

        if days.is_empty() {
            info("Aucune opération");
            return Ok(());
        }

        for day in &days {
            println!(
                "{} {} => {}",
                bold(&long_date(day.day)),
                colorize_money(day.total_money(), &format_money(day.total_money())),
                day.summary_text()
            );

            if !*details {
                continue;
            }

            println!("{}", cfg.separator_char.repeat(40));

            for group in &day.users {
                println!(
                    "  {} {} ({})",
                    pad_right(&snapshot.user_name(group.user), 24),
                    format_money(group.total_money()),
                    group.summary_text()
                );
                for entry in &group.entries {
                    let what = match entry.class() {
                        LedgerClass::Item => snapshot.item_name(entry.item_id),
                        LedgerClass::Membership => "Adhésion".to_string(),
                        LedgerClass::CardTopUp => "Carte".to_string(),
                        LedgerClass::Other => "-".to_string(),
                    };
                    println!("      {} {}", pad_right(&what, 22), entry_money(entry.money));
                }
            }
        }
    }
    Ok(())
}
