//! Card rows as typed on the command line: `As Kd | 2c 7h ??`.

use pokerchat_core::{ParseCardError, Slot};
use thiserror::Error;

/// Token marking the split position between two groups of cards.
pub const SPLIT_MARKER: &str = "|";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub slots: Vec<Slot>,
    /// Position of the [`SPLIT_MARKER`], counted in slots before it.
    pub split: Option<usize>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("card #{position} `{token}`: {source}")]
    Slot {
        position: usize,
        token: String,
        #[source]
        source: ParseCardError,
    },
    #[error("split marker `|` given more than once")]
    RepeatedSplit,
}

pub fn parse_row<I, S>(tokens: I) -> Result<Row, RowError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut row = Row::default();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        if token == SPLIT_MARKER {
            if row.split.replace(row.slots.len()).is_some() {
                return Err(RowError::RepeatedSplit);
            }
            continue;
        }
        let slot = token.parse::<Slot>().map_err(|source| RowError::Slot {
            position: row.slots.len() + 1,
            token: token.to_string(),
            source,
        })?;
        row.slots.push(slot);
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerchat_core::{Card, Rank, Suit};

    #[test]
    fn marker_records_split_position() {
        let row = parse_row(["As", "Kd", "|", "2c", "??"]).expect("row");
        assert_eq!(row.split, Some(2));
        assert_eq!(
            row.slots,
            vec![
                Slot::from(Card::new(Rank::Ace, Suit::Spades)),
                Slot::from(Card::new(Rank::King, Suit::Diamonds)),
                Slot::from(Card::new(Rank::Two, Suit::Clubs)),
                Slot::Absent,
            ]
        );
    }

    #[test]
    fn empty_input_is_empty_row() {
        let row = parse_row(Vec::<String>::new()).expect("row");
        assert_eq!(row, Row::default());
    }

    #[test]
    fn bad_card_reports_position() {
        let err = parse_row(["As", "Zz"]).expect_err("bad card");
        assert!(matches!(err, RowError::Slot { position: 2, .. }));
    }

    #[test]
    fn second_marker_is_rejected() {
        assert_eq!(
            parse_row(["|", "As", "|"]).expect_err("two markers"),
            RowError::RepeatedSplit
        );
    }
}
