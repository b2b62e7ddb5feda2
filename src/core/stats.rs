//! Catalog statistics.

use crate::models::Item;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Time since an item last came back, in 6-month steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LastLoanAge {
    /// Upper bound of the step, in months (6, 12, 18, ...).
    Months(u32),
    /// No recorded return.
    Never,
}

/// Whole calendar months from `from` to `to`, negative when `to` is earlier.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if months > 0 && to.day() < from.day() {
        months -= 1;
    } else if months < 0 && to.day() > from.day() {
        months += 1;
    }
    months
}

/// Regular games (enabled, neither big nor outside) counted by how long ago
/// they were last returned.
pub fn items_by_last_loan(items: &[Item], today: NaiveDate) -> BTreeMap<LastLoanAge, usize> {
    let mut counts = BTreeMap::new();

    for item in items
        .iter()
        .filter(|i| !i.is_disabled() && !i.big && !i.outside)
    {
        let age = match item.loanstop {
            Some(stop) => {
                // Anything returned this month (or dated in the future) lands in the first step.
                let months = months_between(stop, today).max(1) as u32;
                LastLoanAge::Months(6 * months.div_ceil(6))
            }
            None => LastLoanAge::Never,
        };
        *counts.entry(age).or_insert(0) += 1;
    }

    counts
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub total: usize,
    pub enabled: usize,
    pub out: usize,
}

pub fn catalog_counts(items: &[Item]) -> CatalogCounts {
    CatalogCounts {
        total: items.len(),
        enabled: items.iter().filter(|i| !i.is_disabled()).count(),
        out: items.iter().filter(|i| i.is_out()).count(),
    }
}
