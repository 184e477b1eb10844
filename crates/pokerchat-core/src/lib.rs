#![deny(warnings)]
pub mod icons;
pub mod model;
pub mod render;

pub use icons::{
    IconError, IconFormat, IconId, IconTables, LowerIcons, LowerKey, PlainIcons, UpperIcons,
};
pub use model::ParseCardError;
pub use model::card::Card;
pub use model::rank::Rank;
pub use model::slot::Slot;
pub use model::suit::Suit;
pub use render::{CardGridRenderer, GAP, Layout, render};
