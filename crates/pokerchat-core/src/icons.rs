//! Icon tables mapping card halves to opaque display identifiers.
//!
//! Tables are validated when they are built: a table that constructs
//! successfully has an entry for every card (or suit) plus its face-down
//! entry, so lookups during rendering cannot miss.

use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::slot::Slot;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;

const RANKS_PER_SUIT: usize = Rank::ORDERED.len();

/// Platform-specific icon reference (a custom emoji id in chat deployments).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(String);

impl IconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for IconId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Which half of the two-row card strip a table feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Upper,
    Lower,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Half::Upper => "upper",
            Half::Lower => "lower",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    #[error("missing upper icon mapping for ({suit}, {rank})")]
    MissingCard { suit: Suit, rank: Rank },
    #[error("missing lower icon mapping for suit {0}")]
    MissingSuit(Suit),
    #[error("missing face-down icon in {0} table")]
    MissingFaceDown(Half),
    #[error("{half} icon for `{key}` defined more than once")]
    Duplicate { half: Half, key: String },
}

/// Key of a lower-half icon: a suit, or the face-down back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LowerKey {
    Suit(Suit),
    FaceDown,
}

impl fmt::Display for LowerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowerKey::Suit(suit) => write!(f, "{suit}"),
            LowerKey::FaceDown => f.write_str("face_down"),
        }
    }
}

/// Upper-half icons: one per (suit, rank) plus the face-down icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpperIcons {
    faces: Vec<IconId>,
    face_down: IconId,
}

impl UpperIcons {
    /// Build from `(key, icon)` pairs where [`Slot::Absent`] keys the
    /// face-down icon.
    pub fn from_entries<I>(entries: I) -> Result<Self, IconError>
    where
        I: IntoIterator<Item = (Slot, IconId)>,
    {
        let mut by_slot = collect_unique(entries, Half::Upper)?;
        let face_down = by_slot
            .remove(&Slot::Absent)
            .ok_or(IconError::MissingFaceDown(Half::Upper))?;
        let faces = Card::standard_deck()
            .map(|card| {
                by_slot
                    .remove(&Slot::Concrete(card))
                    .ok_or(IconError::MissingCard {
                        suit: card.suit,
                        rank: card.rank,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { faces, face_down })
    }

    pub fn get(&self, slot: Slot) -> &IconId {
        match slot {
            Slot::Concrete(card) => {
                &self.faces[card.suit.index() * RANKS_PER_SUIT + card.rank.index()]
            }
            Slot::Absent => &self.face_down,
        }
    }

    pub fn face_down(&self) -> &IconId {
        &self.face_down
    }
}

/// Lower-half icons: one per suit plus the face-down icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowerIcons {
    suits: Vec<IconId>,
    face_down: IconId,
}

impl LowerIcons {
    /// Build from `(key, icon)` pairs; [`LowerKey::FaceDown`] keys the back.
    pub fn from_entries<I>(entries: I) -> Result<Self, IconError>
    where
        I: IntoIterator<Item = (LowerKey, IconId)>,
    {
        let mut by_suit = collect_unique(entries, Half::Lower)?;
        let face_down = by_suit
            .remove(&LowerKey::FaceDown)
            .ok_or(IconError::MissingFaceDown(Half::Lower))?;
        let suits = Suit::ALL
            .into_iter()
            .map(|suit| {
                by_suit
                    .remove(&LowerKey::Suit(suit))
                    .ok_or(IconError::MissingSuit(suit))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { suits, face_down })
    }

    pub fn get(&self, slot: Slot) -> &IconId {
        match slot {
            Slot::Concrete(card) => &self.suits[card.suit.index()],
            Slot::Absent => &self.face_down,
        }
    }

    pub fn face_down(&self) -> &IconId {
        &self.face_down
    }
}

/// The pair of tables a strip is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTables {
    pub upper: UpperIcons,
    pub lower: LowerIcons,
}

impl IconTables {
    pub fn new(upper: UpperIcons, lower: LowerIcons) -> Self {
        Self { upper, lower }
    }
}

/// Turns an icon id into the text a chat client displays for it.
pub trait IconFormat {
    fn display(&self, icon: &IconId) -> String;
}

/// Emits icon ids unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainIcons;

impl IconFormat for PlainIcons {
    fn display(&self, icon: &IconId) -> String {
        icon.as_str().to_string()
    }
}

fn collect_unique<K, I>(entries: I, half: Half) -> Result<HashMap<K, IconId>, IconError>
where
    K: Copy + Eq + std::hash::Hash + fmt::Display,
    I: IntoIterator<Item = (K, IconId)>,
{
    let mut map = HashMap::new();
    for (key, icon) in entries {
        match map.entry(key) {
            Entry::Occupied(_) => {
                return Err(IconError::Duplicate {
                    half,
                    key: key.to_string(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(icon);
            }
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper_entries() -> Vec<(Slot, IconId)> {
        Card::standard_deck()
            .map(|card| (Slot::Concrete(card), IconId::new(format!("u-{card}"))))
            .chain([(Slot::Absent, IconId::new("u-back"))])
            .collect()
    }

    fn lower_entries() -> Vec<(LowerKey, IconId)> {
        Suit::ALL
            .into_iter()
            .map(|suit| (LowerKey::Suit(suit), IconId::new(format!("l-{suit}"))))
            .chain([(LowerKey::FaceDown, IconId::new("l-back"))])
            .collect()
    }

    #[test]
    fn complete_tables_resolve_every_slot() {
        let upper = UpperIcons::from_entries(upper_entries()).expect("complete upper");
        let lower = LowerIcons::from_entries(lower_entries()).expect("complete lower");

        for card in Card::standard_deck() {
            assert_eq!(upper.get(card.into()).as_str(), format!("u-{card}"));
            assert_eq!(lower.get(card.into()).as_str(), format!("l-{}", card.suit));
        }
        assert_eq!(upper.get(Slot::Absent).as_str(), "u-back");
        assert_eq!(lower.get(Slot::Absent).as_str(), "l-back");
    }

    #[test]
    fn missing_card_is_named() {
        let queen = Card::new(Rank::Queen, Suit::Hearts);
        let entries = upper_entries()
            .into_iter()
            .filter(|(slot, _)| *slot != Slot::Concrete(queen));
        let err = UpperIcons::from_entries(entries).expect_err("incomplete");
        assert_eq!(
            err,
            IconError::MissingCard {
                suit: Suit::Hearts,
                rank: Rank::Queen
            }
        );
        assert_eq!(err.to_string(), "missing upper icon mapping for (h, Q)");
    }

    #[test]
    fn missing_face_down_is_reported_per_half() {
        let upper = upper_entries()
            .into_iter()
            .filter(|(slot, _)| !slot.is_absent());
        assert_eq!(
            UpperIcons::from_entries(upper).expect_err("no back"),
            IconError::MissingFaceDown(Half::Upper)
        );

        let lower = lower_entries().into_iter().filter(|(key, _)| *key != LowerKey::FaceDown);
        assert_eq!(
            LowerIcons::from_entries(lower).expect_err("no back"),
            IconError::MissingFaceDown(Half::Lower)
        );
    }

    #[test]
    fn missing_suit_is_named() {
        let lower = lower_entries()
            .into_iter()
            .filter(|(key, _)| *key != LowerKey::Suit(Suit::Diamonds));
        assert_eq!(
            LowerIcons::from_entries(lower).expect_err("no diamonds"),
            IconError::MissingSuit(Suit::Diamonds)
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut entries = lower_entries();
        entries.push((LowerKey::Suit(Suit::Clubs), IconId::new("again")));
        let err = LowerIcons::from_entries(entries).expect_err("duplicate");
        assert_eq!(
            err,
            IconError::Duplicate {
                half: Half::Lower,
                key: "c".to_string()
            }
        );
    }

    #[test]
    fn duplicate_face_down_is_named() {
        let mut entries = lower_entries();
        entries.push((LowerKey::FaceDown, IconId::new("again")));
        let err = LowerIcons::from_entries(entries).expect_err("duplicate back");
        assert_eq!(
            err.to_string(),
            "lower icon for `face_down` defined more than once"
        );
    }

    #[test]
    fn plain_icons_pass_ids_through() {
        let format: &dyn IconFormat = &PlainIcons;
        assert_eq!(format.display(&IconId::new("7")), "7");
    }
}
