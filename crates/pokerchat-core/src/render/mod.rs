pub mod grid;
pub mod layout;

pub use grid::{CardGridRenderer, GAP, render};
pub use layout::Layout;
