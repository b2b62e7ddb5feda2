use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::session::FilterStore;
use crate::core::ViewFilterEngine;
use crate::core::users::{UserListFilters, has_late_loans, loans_label, subscription_overdue};
use crate::errors::AppResult;
use crate::models::Role;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

use super::{load_snapshot, open_store, reference_date};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Users {
        text,
        show_disabled,
        save,
        reset,
    } = &cli.command
    {
        let mut store = open_store(cli);
        let mut session = store.load()?.unwrap_or_default();

        // Item filters stay remembered.
        if *reset {
            session.users = UserListFilters::default();
            store.save(&session)?;
        }

        let mut filters: UserListFilters = session.users.clone();
        if let Some(t) = text {
            filters.text = t.clone();
        }
        if *show_disabled {
            filters.show_disabled = true;
        }

        if *save {
            session.users = filters.clone();
            store.save(&session)?;
            success("Member filters saved.");
        }

        let snapshot = load_snapshot(cfg)?;
        let today = reference_date(cli)?;
        let engine = ViewFilterEngine::new(&snapshot, today);
        let view = engine.users(&filters);

        if view.visible.is_empty() {
            info("Aucun adhérent");
        } else {
            let mut table = Table::new(vec![
                Column::right("#"),
                Column::left("Nom"),
                Column::left("Emails"),
                Column::right("Prêts"),
                Column::left(""),
            ]);

            for user in &view.visible {
                let name = match user.role {
                    Role::Admin => format!("{} ★", user.name),
                    Role::Benevole => format!("{} ☆", user.name),
                    _ => user.name.clone(),
                };

                let mut marks = Vec::new();
                if subscription_overdue(user, today) {
                    marks.push("Adhésion en retard");
                }
                if has_late_loans(user, today) {
                    marks.push("Jeux en retard");
                }
                if user.is_disabled() {
                    marks.push("Utilisateur désactivé");
                }

                table.add_row(vec![
                    user.id.to_string(),
                    name,
                    user.emails.join(", "),
                    loans_label(user),
                    marks.join(", "),
                ]);
            }

            print!("{}", table.render());
        }

        let footer = view.hidden_label();
        if !footer.is_empty() {
            println!("{footer}");
        }
    }
    Ok(())
}
