//! Loan history of a member, grouped by the month the loans started.

use crate::core::group::group_by;
use crate::models::Loan;
use crate::utils::date::month_label;
use chrono::Datelike;

#[derive(Debug, Clone)]
pub struct MonthGroup<'a> {
    pub year: i32,
    pub month: u32,
    pub loans: Vec<&'a Loan>,
}

impl MonthGroup<'_> {
    /// e.g. `"mars 2024"`.
    pub fn label(&self) -> String {
        month_label(self.year, self.month)
    }
}

pub fn group_by_start_month<'a, I>(loans: I) -> Vec<MonthGroup<'a>>
where
    I: IntoIterator<Item = &'a Loan>,
{
    group_by(loans, |l| (l.start.year(), l.start.month()))
        .into_iter()
        .map(|((year, month), loans)| MonthGroup { year, month, loans })
        .collect()
}

/// Loans of `user_id`, grouped by start month in input order.
pub fn user_history(loans: &[Loan], user_id: i64) -> Vec<MonthGroup<'_>> {
    group_by_start_month(loans.iter().filter(|l| l.user == Some(user_id)))
}
