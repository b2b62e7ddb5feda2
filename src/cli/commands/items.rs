use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::session::FilterStore;
use crate::core::ViewFilterEngine;
use crate::core::items::{ItemListFilters, item_flags, players_label};
use crate::errors::{AppError, AppResult};
use crate::models::{AgeBracket, Item};
use crate::ui::messages::{info, success};
use crate::utils::formatting::plural;
use crate::utils::table::{Column, Table};

use super::{load_snapshot, open_store, reference_date};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Items {
        text,
        exclude_age,
        no_big,
        no_outside,
        only_big_outside,
        show_disabled,
        save,
        reset,
    } = &cli.command
    {
        let mut store = open_store(cli);
        let stored = if *reset {
            store.clear()?;
            None
        } else {
            store.load()?
        };

        let mut session = stored.clone().unwrap_or_default();
        let base = stored
            .map(|s| s.items)
            .unwrap_or_else(|| cfg.default_item_filters.clone());

        let filters = apply_overrides(
            base,
            text.as_deref(),
            exclude_age,
            *no_big,
            *no_outside,
            *only_big_outside,
            *show_disabled,
        )?;

        if *save {
            session.items = filters.clone();
            store.save(&session)?;
            success("Item filters saved.");
        }

        let snapshot = load_snapshot(cfg)?;
        let engine = ViewFilterEngine::new(&snapshot, reference_date(cli)?);
        let displayed = engine.items(&filters);

        tracing::debug!(
            total = snapshot.items.len(),
            shown = displayed.len(),
            "item list filtered"
        );

        if displayed.is_empty() {
            info("Aucun jeu");
            return Ok(());
        }

        print_items(&displayed);
    }
    Ok(())
}

/// Layer command-line options over the remembered filters.
pub fn apply_overrides(
    mut filters: ItemListFilters,
    text: Option<&str>,
    exclude_age: &[u8],
    no_big: bool,
    no_outside: bool,
    only_big_outside: bool,
    show_disabled: bool,
) -> AppResult<ItemListFilters> {
    if let Some(t) = text {
        filters.text = t.to_string();
    }
    for age in exclude_age {
        let bracket = AgeBracket::from_value(*age).ok_or(AppError::InvalidAge(*age))?;
        filters.exclude_age(bracket);
    }
    if no_big {
        filters.exclude_big = true;
    }
    if no_outside {
        filters.exclude_outside = true;
    }
    if only_big_outside {
        filters.only_big_or_outside = true;
    }
    if show_disabled {
        filters.exclude_disabled = false;
    }
    Ok(filters)
}

fn print_items(items: &[&Item]) {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Nom"),
        Column::left("Joueurs"),
        Column::left("Age"),
        Column::left(""),
    ]);

    for item in items {
        let age = item.age.map(|a| format!("{a}+")).unwrap_or_default();
        let flags: Vec<&str> = item_flags(item).iter().map(|f| f.label()).collect();

        table.add_row(vec![
            item.id.to_string(),
            item.name.clone(),
            players_label(item),
            age,
            flags.join(", "),
        ]);
    }

    print!("{}", table.render());
    println!("{}", plural(items.len(), "jeu", "jeux"));
}
