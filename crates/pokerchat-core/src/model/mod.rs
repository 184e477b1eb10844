pub mod card;
pub mod rank;
pub mod slot;
pub mod suit;

use thiserror::Error;

/// Rejected card notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("unrecognised card `{0}`")]
    Card(String),
    #[error("unrecognised rank `{0}`")]
    Rank(String),
    #[error("unrecognised suit `{0}`")]
    Suit(String),
}
