use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::ViewFilterEngine;
use crate::core::stats::LastLoanAge;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

use super::{load_snapshot, reference_date};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let snapshot = load_snapshot(cfg)?;
    let engine = ViewFilterEngine::new(&snapshot, reference_date(cli)?);

    let counts = engine.catalog_counts();
    header("Catalogue");
    println!("Jeux       : {}", counts.total);
    println!("Disponibles: {}", counts.enabled);
    println!("Empruntés  : {}", counts.out);
    println!("Prêts en retard: {}", engine.late().total());

    header("Dernier emprunt");
    let mut table = Table::new(vec![Column::left("Depuis"), Column::right("Jeux")]);
    for (age, n) in engine.items_by_last_loan() {
        let label = match age {
            LastLoanAge::Months(m) => format!("≤ {m} mois"),
            LastLoanAge::Never => "Jamais".to_string(),
        };
        table.add_row(vec![label, n.to_string()]);
    }
    print!("{}", table.render());

    Ok(())
}
