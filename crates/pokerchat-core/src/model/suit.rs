use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::model::ParseCardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Spades = 1,
    Hearts = 2,
    Diamonds = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            'c' | 'C' | '♣' => Some(Suit::Clubs),
            's' | 'S' | '♠' => Some(Suit::Spades),
            'h' | 'H' | '♥' => Some(Suit::Hearts),
            'd' | 'D' | '♦' => Some(Suit::Diamonds),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::from_char(c).ok_or_else(|| ParseCardError::Suit(s.to_string())),
            _ => Err(ParseCardError::Suit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Suit;

    #[test]
    fn display_returns_ascii_letters() {
        assert_eq!(Suit::Clubs.to_string(), "c");
        assert_eq!(Suit::Hearts.to_string(), "h");
    }

    #[test]
    fn parses_letters_and_symbols() {
        assert_eq!("S".parse::<Suit>().unwrap(), Suit::Spades);
        assert_eq!("♦".parse::<Suit>().unwrap(), Suit::Diamonds);
        assert!("x".parse::<Suit>().is_err());
        assert!("hh".parse::<Suit>().is_err());
        assert!("".parse::<Suit>().is_err());
    }
}
