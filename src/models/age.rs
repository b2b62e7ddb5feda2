use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended minimum age of a game, as printed on the age chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    Zero,
    Two,
    Four,
    Six,
    Eight,
    Ten,
}

impl AgeBracket {
    /// All brackets in index order (index i ↔ `ItemListFilters::age_exclude[i]`).
    pub const ALL: [AgeBracket; 6] = [
        AgeBracket::Zero,
        AgeBracket::Two,
        AgeBracket::Four,
        AgeBracket::Six,
        AgeBracket::Eight,
        AgeBracket::Ten,
    ];

    pub fn value(&self) -> u8 {
        match self {
            AgeBracket::Zero => 0,
            AgeBracket::Two => 2,
            AgeBracket::Four => 4,
            AgeBracket::Six => 6,
            AgeBracket::Eight => 8,
            AgeBracket::Ten => 10,
        }
    }

    pub fn index(&self) -> usize {
        (self.value() / 2) as usize
    }

    pub fn from_value(age: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.value() == age)
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+", self.value())
    }
}
