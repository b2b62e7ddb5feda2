use crate::core::history::{self, MonthGroup};
use crate::core::items::{self, ItemListFilters};
use crate::core::late::{self, LateReport};
use crate::core::ledger::{self, LedgerDay};
use crate::core::stats::{self, CatalogCounts, LastLoanAge};
use crate::core::users::{self, UserListFilters, UserListView};
use crate::models::{Item, Snapshot};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Derived views over one snapshot, as of `today`.
pub struct ViewFilterEngine<'a> {
    snapshot: &'a Snapshot,
    today: NaiveDate,
}

impl<'a> ViewFilterEngine<'a> {
    pub fn new(snapshot: &'a Snapshot, today: NaiveDate) -> Self {
        Self { snapshot, today }
    }

    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn items(&self, filters: &ItemListFilters) -> Vec<&'a Item> {
        items::filter_items(&self.snapshot.items, filters)
    }

    pub fn users(&self, filters: &UserListFilters) -> UserListView<'a> {
        users::filter_users(&self.snapshot.users, filters)
    }

    pub fn late(&self) -> LateReport<'a> {
        late::late_report(&self.snapshot.loans, self.today)
    }

    pub fn ledger(&self) -> Vec<LedgerDay<'a>> {
        ledger::ledger_days(&self.snapshot.ledger)
    }

    pub fn history(&self, user_id: i64) -> Vec<MonthGroup<'a>> {
        history::user_history(&self.snapshot.loans, user_id)
    }

    pub fn catalog_counts(&self) -> CatalogCounts {
        stats::catalog_counts(&self.snapshot.items)
    }

    pub fn items_by_last_loan(&self) -> BTreeMap<LastLoanAge, usize> {
        stats::items_by_last_loan(&self.snapshot.items, self.today)
    }
}
