use crate::model::ParseCardError;
use crate::model::card::Card;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// One position in a displayed card row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Concrete(Card),
    /// Face-down, or not dealt yet.
    Absent,
}

impl Slot {
    pub const fn card(self) -> Option<Card> {
        match self {
            Slot::Concrete(card) => Some(card),
            Slot::Absent => None,
        }
    }

    pub const fn is_absent(self) -> bool {
        matches!(self, Slot::Absent)
    }
}

impl From<Card> for Slot {
    fn from(card: Card) -> Self {
        Slot::Concrete(card)
    }
}

impl From<Option<Card>> for Slot {
    fn from(card: Option<Card>) -> Self {
        card.map_or(Slot::Absent, Slot::Concrete)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Concrete(card) => write!(f, "{card}"),
            Slot::Absent => f.write_str("??"),
        }
    }
}

impl FromStr for Slot {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "??" | "xx" | "XX" | "--" => Ok(Slot::Absent),
            other => other.parse::<Card>().map(Slot::Concrete),
        }
    }
}
