use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `item_id` used for a new-membership fee.
pub const MEMBERSHIP_ID: i64 = -1;
/// `item_id` used for a card top-up.
pub const CARD_ID: i64 = -2;

/// One monetary transaction of the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub day: NaiveDate,
    pub user: i64,
    pub item_id: i64,
    pub money: f64,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub operator_id: Option<i64>,
    #[serde(default)]
    pub loan_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// What a ledger entry pays for, derived from the `item_id` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerClass {
    Membership,
    CardTopUp,
    Item,
    /// Any other id (0 or below -2): counted in money sums only.
    Other,
}

impl LedgerEntry {
    pub fn class(&self) -> LedgerClass {
        match self.item_id {
            MEMBERSHIP_ID => LedgerClass::Membership,
            CARD_ID => LedgerClass::CardTopUp,
            id if id > 0 => LedgerClass::Item,
            _ => LedgerClass::Other,
        }
    }
}
