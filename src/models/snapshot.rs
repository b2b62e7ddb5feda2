//! The in-memory data set the views are computed from.
//!
//! A snapshot is the JSON equivalent of the API responses for `/items`,
//! `/users`, `/loans` and `/ledger`, gathered into a single document.

use super::{item::Item, ledger::LedgerEntry, loan::Loan, user::User};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub ledger: Vec<LedgerEntry>,
}

impl Snapshot {
    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a snapshot file. Malformed records (dates included) are rejected here,
    /// so the view logic only ever receives well-typed values.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::SnapshotMissing(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;

        tracing::debug!(
            path = %path.display(),
            items = snapshot.items.len(),
            users = snapshot.users.len(),
            loans = snapshot.loans.len(),
            ledger = snapshot.ledger.len(),
            "snapshot loaded"
        );

        Ok(snapshot)
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn item(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn user_name(&self, id: i64) -> String {
        self.user(id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn item_name(&self, id: i64) -> String {
        self.item(id)
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
