//! Item list: text/kind/age/availability filtering and ordering.

use crate::models::item::UNBOUNDED_PLAYERS;
use crate::models::{AgeBracket, Item};
use serde::{Deserialize, Serialize};

/// Filter state of the item list. Missing fields take their default when
/// deserialized from the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemListFilters {
    pub text: String,
    /// `true` at index i hides the games of bracket `AgeBracket::ALL[i]`.
    pub age_exclude: [bool; 6],
    pub exclude_outside: bool,
    pub exclude_big: bool,
    /// Keep only the games that are big or meant for outside.
    pub only_big_or_outside: bool,
    pub exclude_disabled: bool,
}

impl Default for ItemListFilters {
    fn default() -> Self {
        Self {
            text: String::new(),
            age_exclude: [false; 6],
            exclude_outside: false,
            exclude_big: false,
            only_big_or_outside: false,
            exclude_disabled: true,
        }
    }
}

impl ItemListFilters {
    pub fn exclude_age(&mut self, bracket: AgeBracket) {
        self.age_exclude[bracket.index()] = true;
    }

    pub fn excluded_ages(&self) -> impl Iterator<Item = AgeBracket> + '_ {
        AgeBracket::ALL
            .into_iter()
            .filter(|b| self.age_exclude[b.index()])
    }

    /// Does `item` pass every criterion?
    pub fn matches(&self, item: &Item) -> bool {
        if !self.text.is_empty() {
            let needle = self.text.to_lowercase();
            if !item.name.to_lowercase().contains(&needle)
                && !item.id.to_string().contains(&needle)
            {
                return false;
            }
        }

        if self.only_big_or_outside && !item.is_big_or_outside() {
            return false;
        }
        if self.exclude_big && item.big {
            return false;
        }
        if self.exclude_outside && item.outside {
            return false;
        }

        // Unset age never matches a bracket, so it is never excluded here.
        if self.excluded_ages().any(|b| item.age == Some(b.value())) {
            return false;
        }

        !(self.exclude_disabled && item.is_disabled())
    }
}

/// Items to display for `filters`, highest id first.
pub fn filter_items<'a>(items: &'a [Item], filters: &ItemListFilters) -> Vec<&'a Item> {
    let mut displayed: Vec<&Item> = items.iter().filter(|i| filters.matches(i)).collect();
    displayed.sort_by(|a, b| b.id.cmp(&a.id));
    displayed
}

/// Player range as shown in the list: `3`, `2+` or `2 - 4`.
pub fn players_label(item: &Item) -> String {
    match (item.players_min, item.players_max) {
        (Some(min), Some(max)) if min == max => min.to_string(),
        (Some(min), Some(UNBOUNDED_PLAYERS)) => format!("{min}+"),
        (Some(min), Some(max)) => format!("{min} - {max}"),
        (Some(min), None) => min.to_string(),
        _ => String::new(),
    }
}

/// Markers shown next to the item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFlag {
    Out,
    Big,
    Outside,
    Disabled,
}

impl ItemFlag {
    pub fn label(&self) -> &'static str {
        match self {
            ItemFlag::Out => "Emprunté",
            ItemFlag::Big => "Surdimensionné",
            ItemFlag::Outside => "Jeu d'Extérieur",
            ItemFlag::Disabled => "Indisponible",
        }
    }
}

pub fn item_flags(item: &Item) -> Vec<ItemFlag> {
    let mut flags = Vec::new();
    if item.is_out() {
        flags.push(ItemFlag::Out);
    }
    if item.big {
        flags.push(ItemFlag::Big);
    }
    if item.outside {
        flags.push(ItemFlag::Outside);
    }
    if item.is_disabled() {
        flags.push(ItemFlag::Disabled);
    }
    flags
}
