use serde::{Deserialize, Serialize};

/// Per-cell snapshot read by the presentation layer once per frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    pub revealed: bool,
    pub has_mine: bool,
    /// Only meaningful when `has_mine` is false.
    pub adjacent_mines: u8,
}

impl CellState {
    pub const fn view(self) -> CellView {
        match (self.revealed, self.has_mine) {
            (false, _) => CellView::Hidden,
            (true, true) => CellView::Mine,
            (true, false) => CellView::Revealed(self.adjacent_mines),
        }
    }
}

/// What a cell should be drawn as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

impl From<CellState> for CellView {
    fn from(state: CellState) -> Self {
        state.view()
    }
}
