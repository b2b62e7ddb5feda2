use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound used by the catalog to mean "any number of players".
pub const UNBOUNDED_PLAYERS: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// On the shelf.
    In,
    /// Lent to a member.
    Out,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A lendable game, as returned by the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub big: bool,
    #[serde(default)]
    pub outside: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub players_min: Option<u32>,
    #[serde(default)]
    pub players_max: Option<u32>,
    /// Date the item last came back from a loan.
    #[serde(default)]
    pub loanstop: Option<NaiveDate>,
}

impl Item {
    /// Only an explicit `enabled: false` marks an item unavailable.
    pub fn is_disabled(&self) -> bool {
        self.enabled == Some(false)
    }

    pub fn is_out(&self) -> bool {
        self.status == ItemStatus::Out
    }

    pub fn is_big_or_outside(&self) -> bool {
        self.big || self.outside
    }
}
