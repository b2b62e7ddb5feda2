use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Operator,
    Benevole,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Operator => "operator",
            Role::Benevole => "benevole",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

/// A library member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub credit: f64,
    /// Membership expiry date.
    #[serde(default)]
    pub subscription: Option<NaiveDate>,
    #[serde(default)]
    pub emails: Vec<String>,
    /// Number of outstanding loans.
    #[serde(default)]
    pub loans: Option<u32>,
    /// Due date of the oldest outstanding loan.
    #[serde(default)]
    pub oldest_loan: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl User {
    pub fn is_disabled(&self) -> bool {
        self.enabled == Some(false)
    }
}
