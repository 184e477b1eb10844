use crate::model::ParseCardError;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// All 52 cards, suit-major in [`Suit::ALL`] then [`Rank::ORDERED`] order.
    pub fn standard_deck() -> impl Iterator<Item = Card> {
        Suit::ALL.into_iter().flat_map(|suit| {
            Rank::ORDERED
                .into_iter()
                .map(move |rank| Card::new(rank, suit))
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((split, suit_char)) = trimmed.char_indices().last() else {
            return Err(ParseCardError::Card(s.to_string()));
        };
        if split == 0 {
            return Err(ParseCardError::Card(s.to_string()));
        }
        let suit = Suit::from_char(suit_char)
            .ok_or_else(|| ParseCardError::Suit(suit_char.to_string()))?;
        let rank = trimmed[..split].parse::<Rank>()?;
        Ok(Card::new(rank, suit))
    }
}
