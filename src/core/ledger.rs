//! Ledger: entries grouped by day, then by member, with money totals and
//! short textual summaries.

use crate::core::group::group_by;
use crate::models::{LedgerClass, LedgerEntry};
use crate::utils::formatting::plural;
use chrono::NaiveDate;

/// How many entries of each sentinel class a group holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub items: usize,
    pub cards: usize,
    pub memberships: usize,
}

impl ClassCounts {
    pub fn of(entries: &[&LedgerEntry]) -> Self {
        let mut counts = Self::default();
        for e in entries {
            match e.class() {
                LedgerClass::Item => counts.items += 1,
                LedgerClass::CardTopUp => counts.cards += 1,
                LedgerClass::Membership => counts.memberships += 1,
                LedgerClass::Other => {}
            }
        }
        counts
    }
}

fn total_money(entries: &[&LedgerEntry]) -> f64 {
    entries.iter().map(|e| e.money).sum()
}

/// Entries of one member on one day.
#[derive(Debug, Clone)]
pub struct LedgerUserGroup<'a> {
    pub user: i64,
    pub entries: Vec<&'a LedgerEntry>,
}

impl LedgerUserGroup<'_> {
    pub fn total_money(&self) -> f64 {
        total_money(&self.entries)
    }

    pub fn counts(&self) -> ClassCounts {
        ClassCounts::of(&self.entries)
    }

    /// e.g. `"Nouvel adhérent, 1 carte, 2 jeux"`.
    pub fn summary_text(&self) -> String {
        let counts = self.counts();
        let mut parts = Vec::new();

        // A membership fee is paid once per member and day.
        if counts.memberships > 0 {
            parts.push("Nouvel adhérent".to_string());
        }
        if counts.cards > 0 {
            parts.push(plural(counts.cards, "carte", "cartes"));
        }
        if counts.items > 0 {
            parts.push(plural(counts.items, "jeu", "jeux"));
        }

        parts.join(", ")
    }
}

/// All entries of one day.
#[derive(Debug, Clone)]
pub struct LedgerDay<'a> {
    pub day: NaiveDate,
    pub entries: Vec<&'a LedgerEntry>,
    /// Per-member groups, in first-seen order.
    pub users: Vec<LedgerUserGroup<'a>>,
}

impl LedgerDay<'_> {
    pub fn total_money(&self) -> f64 {
        total_money(&self.entries)
    }

    pub fn counts(&self) -> ClassCounts {
        ClassCounts::of(&self.entries)
    }

    /// e.g. `"3 jeux, 1 carte, 2 adhérents"`.
    pub fn summary_text(&self) -> String {
        let counts = self.counts();
        let mut parts = Vec::new();

        if counts.items > 0 {
            parts.push(plural(counts.items, "jeu", "jeux"));
        }
        if counts.cards > 0 {
            parts.push(plural(counts.cards, "carte", "cartes"));
        }
        if counts.memberships > 0 {
            parts.push(plural(counts.memberships, "adhérent", "adhérents"));
        }

        parts.join(", ")
    }

    pub fn user(&self, user: i64) -> Option<&LedgerUserGroup<'_>> {
        self.users.iter().find(|g| g.user == user)
    }
}

pub fn ledger_days(entries: &[LedgerEntry]) -> Vec<LedgerDay<'_>> {
    group_by(entries.iter(), |e| e.day)
        .into_iter()
        .map(|(day, day_entries)| {
            let users = group_by(day_entries.iter().copied(), |e| e.user)
                .into_iter()
                .map(|(user, entries)| LedgerUserGroup { user, entries })
                .collect();

            LedgerDay {
                day,
                entries: day_entries,
                users,
            }
        })
        .collect()
}
