use serde::{Deserialize, Serialize};

/// Padding and split settings for one rendered strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub split: Option<usize>,
    #[serde(default)]
    pub min_slots: usize,
}

impl Layout {
    pub const FLAT: Layout = Layout::new(None, 0);
    /// A player's two private cards.
    pub const HOLE: Layout = Layout::new(None, 2);
    /// The five community cards.
    pub const BOARD: Layout = Layout::new(None, 5);
    /// Hole cards and board in one strip, gapped after the hole.
    pub const SHOWDOWN: Layout = Layout::new(Some(2), 7);

    pub const fn new(split: Option<usize>, min_slots: usize) -> Self {
        Self { split, min_slots }
    }

    pub const fn with_split(self, split: usize) -> Self {
        Self::new(Some(split), self.min_slots)
    }

    pub const fn with_min_slots(self, min_slots: usize) -> Self {
        Self::new(self.split, min_slots)
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "flat" => Some(Layout::FLAT),
            "hole" => Some(Layout::HOLE),
            "board" => Some(Layout::BOARD),
            "showdown" => Some(Layout::SHOWDOWN),
            _ => None,
        }
    }
}
