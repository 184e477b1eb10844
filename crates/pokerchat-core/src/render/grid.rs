//! Two-row card strips.
//!
//! Each slot becomes an upper token (rank and suit) stacked over a lower
//! token (suit only). Face-down and padding slots use each table's
//! face-down icon.

use std::borrow::Cow;

use crate::icons::{IconFormat, IconTables};
use crate::model::slot::Slot;
use crate::render::layout::Layout;

/// Separator placed at the split boundary in place of a single space.
pub const GAP: &str = "   ";

/// Render `slots` as two lines of icons.
///
/// The row is padded with [`Slot::Absent`] up to `min_slots`. A gap is
/// placed before padded position `split` when `0 < split < len`; any other
/// split value renders without a gap.
pub fn render<F>(
    tables: &IconTables,
    format: &F,
    slots: &[Slot],
    split: Option<usize>,
    min_slots: usize,
) -> String
where
    F: IconFormat + ?Sized,
{
    let padded = pad(slots, min_slots);
    let split = split.filter(|&index| index > 0 && index < padded.len());

    let upper = join_line(
        padded
            .iter()
            .map(|slot| format.display(tables.upper.get(*slot))),
        split,
    );
    let lower = join_line(
        padded
            .iter()
            .map(|slot| format.display(tables.lower.get(*slot))),
        split,
    );

    let mut out = String::with_capacity(upper.len() + lower.len() + 1);
    out.push_str(&upper);
    out.push('\n');
    out.push_str(&lower);
    out
}

/// Borrowed icon tables paired with the display function of one chat client.
#[derive(Debug, Clone)]
pub struct CardGridRenderer<'t, F> {
    tables: &'t IconTables,
    format: F,
}

impl<'t, F> CardGridRenderer<'t, F>
where
    F: IconFormat,
{
    pub fn new(tables: &'t IconTables, format: F) -> Self {
        Self { tables, format }
    }

    pub fn render(&self, slots: &[Slot], split: Option<usize>, min_slots: usize) -> String {
        render(self.tables, &self.format, slots, split, min_slots)
    }

    pub fn render_layout(&self, slots: &[Slot], layout: Layout) -> String {
        self.render(slots, layout.split, layout.min_slots)
    }

    /// Hole cards then community cards, each group padded on its own so a
    /// short hole never pulls board cards across the gap.
    pub fn render_table(&self, hole: &[Slot], board: &[Slot]) -> String {
        let hole = pad(hole, Layout::HOLE.min_slots);
        let board = pad(board, Layout::BOARD.min_slots);
        let split = hole.len();

        let mut row = Vec::with_capacity(hole.len() + board.len());
        row.extend_from_slice(&hole);
        row.extend_from_slice(&board);
        self.render(&row, Some(split), 0)
    }
}

fn pad(slots: &[Slot], min_slots: usize) -> Cow<'_, [Slot]> {
    if slots.len() >= min_slots {
        return Cow::Borrowed(slots);
    }
    let mut padded = Vec::with_capacity(min_slots);
    padded.extend_from_slice(slots);
    padded.resize(min_slots, Slot::Absent);
    Cow::Owned(padded)
}

fn join_line<I>(tokens: I, split: Option<usize>) -> String
where
    I: Iterator<Item = String>,
{
    let mut line = String::new();
    for (index, token) in tokens.enumerate() {
        if index > 0 {
            line.push_str(if split == Some(index) { GAP } else { " " });
        }
        line.push_str(&token);
    }
    line
}
