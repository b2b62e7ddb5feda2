//! Member list filtering.

use crate::models::User;
use crate::utils::formatting::plural;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserListFilters {
    pub text: String,
    pub show_disabled: bool,
}

impl UserListFilters {
    pub fn matches_text(&self, user: &User) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        user.name.to_lowercase().contains(&needle)
            || user
                .emails
                .iter()
                .any(|e| e.to_lowercase().contains(&needle))
    }
}

#[derive(Debug)]
pub struct UserListView<'a> {
    pub visible: Vec<&'a User>,
    /// Members matching the text filter but hidden because they are disabled.
    pub nb_hidden: usize,
}

impl UserListView<'_> {
    /// Footer line under the list; empty when nothing is hidden.
    pub fn hidden_label(&self) -> String {
        match self.nb_hidden {
            0 => String::new(),
            1 => "+1 adhérent désactivé".to_string(),
            n => format!("+{n} adhérents désactivés"),
        }
    }
}

pub fn filter_users<'a>(users: &'a [User], filters: &UserListFilters) -> UserListView<'a> {
    let matching: Vec<&User> = users.iter().filter(|u| filters.matches_text(u)).collect();
    let total = matching.len();

    let visible: Vec<&User> = matching
        .into_iter()
        .filter(|u| filters.show_disabled || !u.is_disabled())
        .collect();

    UserListView {
        nb_hidden: total - visible.len(),
        visible,
    }
}

/// Membership has run out (expiry date reached).
pub fn subscription_overdue(user: &User, today: NaiveDate) -> bool {
    user.subscription.is_some_and(|d| d <= today)
}

/// Oldest outstanding loan is past its due date.
pub fn has_late_loans(user: &User, today: NaiveDate) -> bool {
    user.oldest_loan.is_some_and(|d| d < today)
}

/// `"1 jeu"`, `"3 jeux"`, or empty when the member has nothing out.
pub fn loans_label(user: &User) -> String {
    match user.loans {
        Some(n) if n > 0 => plural(n as usize, "jeu", "jeux"),
        _ => String::new(),
    }
}
