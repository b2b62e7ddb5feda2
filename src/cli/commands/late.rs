use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::ViewFilterEngine;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::color_for_tier;
use crate::utils::formatting::plural;
use crate::utils::table::{Column, Table};

use super::{load_snapshot, reference_date};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let snapshot = load_snapshot(cfg)?;
    let engine = ViewFilterEngine::new(&snapshot, reference_date(cli)?);
    let report = engine.late();

    if report.is_empty() {
        info("Aucun prêt en retard");
        return Ok(());
    }

    for bucket in &report.buckets {
        // The under-a-week bucket is listed without a heading.
        if let Some(label) = bucket.label() {
            let heading = format!("{} ({})", label, bucket.count());
            println!("\n{}", color_for_tier(bucket.tier).bold().paint(heading));
        } else {
            println!();
        }

        let mut table = Table::new(vec![
            Column::left("Adhérent"),
            Column::left("Jeu"),
            Column::right("Retour prévu"),
            Column::right("Retard"),
        ]);

        for late in &bucket.loans {
            let user = late
                .loan
                .user
                .map(|u| snapshot.user_name(u))
                .unwrap_or_else(|| "Unknown".to_string());

            table.add_row(vec![
                user,
                snapshot.item_name(late.loan.item),
                late.loan.stop.to_string(),
                late.col_time(),
            ]);
        }

        print!("{}", table.render());
    }

    println!(
        "\n{}",
        plural(report.total(), "prêt en retard", "prêts en retard")
    );
    Ok(())
}
