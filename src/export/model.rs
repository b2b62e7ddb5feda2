// src/export/model.rs

use crate::core::items::{item_flags, players_label};
use crate::core::late::LateReport;
use crate::core::ledger::LedgerDay;
use crate::models::{Item, Snapshot, User};
use serde::Serialize;

/// Flat rows for CSV / JSON. Derived values sit next to the entity fields,
/// the entities themselves are never modified.
#[derive(Serialize, Clone, Debug)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub players: String,
    pub age: Option<u8>,
    pub flags: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            players: players_label(item),
            age: item.age,
            flags: item_flags(item)
                .iter()
                .map(|f| f.label())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub emails: String,
    pub loans: u32,
    pub credit: f64,
    pub subscription: Option<String>,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            role: user.role.as_str().to_string(),
            emails: user.emails.join(", "),
            loans: user.loans.unwrap_or(0),
            credit: user.credit,
            subscription: user.subscription.map(|d| d.to_string()),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct LateLoanRow {
    pub category: i64,
    pub label: String,
    pub loan: i64,
    pub user: String,
    pub item: String,
    pub stop: String,
    pub days_overdue: i64,
    pub late_for: String,
}

pub(crate) fn late_rows(report: &LateReport<'_>, snapshot: &Snapshot) -> Vec<LateLoanRow> {
    report
        .buckets
        .iter()
        .flat_map(|bucket| {
            bucket.loans.iter().map(move |late| LateLoanRow {
                category: bucket.key(),
                label: bucket.label().unwrap_or_default().to_string(),
                loan: late.loan.id,
                user: late
                    .loan
                    .user
                    .map(|u| snapshot.user_name(u))
                    .unwrap_or_default(),
                item: snapshot.item_name(late.loan.item),
                stop: late.loan.stop.to_string(),
                days_overdue: late.days_overdue,
                late_for: late.col_time(),
            })
        })
        .collect()
}

#[derive(Serialize, Clone, Debug)]
pub struct LedgerDayRow {
    pub day: String,
    pub entries: usize,
    pub total: f64,
    pub summary: String,
}

impl From<&LedgerDay<'_>> for LedgerDayRow {
    fn from(day: &LedgerDay<'_>) -> Self {
        Self {
            day: day.day.to_string(),
            entries: day.entries.len(),
            total: day.total_money(),
            summary: day.summary_text(),
        }
    }
}
