use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Loan state as reported by the API: `out` while the game is with the
/// member, `in` once it has been returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Out,
    In,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub item: i64,
    #[serde(default)]
    pub user: Option<i64>,
    pub start: NaiveDate,
    /// Scheduled return date while open, actual return date once closed.
    pub stop: NaiveDate,
    #[serde(default)]
    pub status: LoanStatus,
}

impl Loan {
    pub fn is_open(&self) -> bool {
        self.status == LoanStatus::Out
    }
}
