use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Leaving a finished phase requires a new board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Playing
    }
}

/// The grid of one session: mine layout, adjacency counts, and which cells have been revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    config: GameConfig,
    mine_layout: MineLayout,
    adjacency: Array2<u8>,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    phase: Phase,
}

impl Board {
    /// Empty board: nothing revealed, no mines, zero adjacency.
    pub fn new(config: GameConfig) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        let size = config.size.to_nd_index();
        Ok(Self {
            config,
            mine_layout: MineLayout::empty(config.size),
            adjacency: Array2::zeros(size),
            revealed: Array2::default(size),
            revealed_count: 0,
            phase: Phase::Playing,
        })
    }

    /// Allocates a board, places mines and computes adjacency in one go.
    pub fn generate<G: MineGenerator>(config: GameConfig, generator: &mut G) -> Result<Self> {
        let mut board = Self::new(config)?;
        board.place_mines(generator)?;
        board.compute_adjacency();
        Ok(board)
    }

    /// Board for a known layout, its size and mine count become the configuration.
    pub fn from_layout(mine_layout: MineLayout) -> Result<Self> {
        let config = GameConfig::new(mine_layout.size(), mine_layout.mine_count())?;
        let mut board = Self::new(config)?;
        board.mine_layout = mine_layout;
        board.compute_adjacency();
        Ok(board)
    }

    /// Replaces the mine layout with one drawn from `generator` and hides every cell again.
    ///
    /// Adjacency is stale until [`Board::compute_adjacency`] runs.
    pub fn place_mines<G: MineGenerator>(&mut self, generator: &mut G) -> Result<()> {
        let layout = generator.generate(self.config)?;
        if layout.size() != self.config.size || layout.mine_count() != self.config.mines {
            return Err(GameError::InvalidConfig(
                "generated layout does not match the board configuration",
            ));
        }
        self.mine_layout = layout;
        self.revealed.fill(false);
        self.revealed_count = 0;
        self.phase = Phase::Playing;
        Ok(())
    }

    pub fn compute_adjacency(&mut self) {
        let layout = &self.mine_layout;
        for ((row, col), count) in self.adjacency.indexed_iter_mut() {
            let coords = (row as Coord, col as Coord);
            *count = if layout.contains_mine(coords) {
                0
            } else {
                layout.adjacent_mine_count(coords)
            };
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    /// Revealed non-mine cells.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.adjacency[coords.to_nd_index()]
    }

    /// Snapshot of one cell, `None` when out of bounds.
    pub fn cell_at(&self, coords: Coord2) -> Option<CellState> {
        if !self.config.contains(coords) {
            return None;
        }
        let index = coords.to_nd_index();
        Some(CellState {
            revealed: self.revealed[index],
            has_mine: self.mine_layout.contains_mine(coords),
            adjacent_mines: self.adjacency[index],
        })
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, CellState)> + '_ {
        self.revealed.indexed_iter().map(|((row, col), &revealed)| {
            let coords = (row as Coord, col as Coord);
            let state = CellState {
                revealed,
                has_mine: self.mine_layout.contains_mine(coords),
                adjacent_mines: self.adjacency[(row, col)],
            };
            (coords, state)
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.config.contains(coords) || self.phase.is_finished() || self.is_revealed(coords)
        {
            return RevealOutcome::NoChange;
        }

        if self.mine_layout.contains_mine(coords) {
            log::debug!("Mine hit at {:?}", coords);
            self.reveal_mines();
            self.phase = Phase::Lost;
            return RevealOutcome::Lost;
        }

        self.reveal_safe(coords);
        log::debug!(
            "Revealed {:?}, adjacent mines: {}",
            coords,
            self.adjacent_mines(coords)
        );

        if self.adjacent_mines(coords) == 0 {
            self.flood_fill(coords);
        }

        if self.revealed_count == self.config.safe_cells() {
            log::debug!("All {} safe cells revealed", self.revealed_count);
            self.phase = Phase::Won;
            RevealOutcome::Won
        } else {
            RevealOutcome::Continue
        }
    }

    fn reveal_safe(&mut self, coords: Coord2) {
        self.revealed[coords.to_nd_index()] = true;
        self.revealed_count += 1;
    }

    /// Opens the zero region around `start` and its numbered border.
    ///
    /// Cells are marked revealed before they are queued, so each is processed at most once.
    fn flood_fill(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.mine_layout.iter_neighbors(visit_coords) {
                if self.is_revealed(pos) || self.mine_layout.contains_mine(pos) {
                    continue;
                }

                self.reveal_safe(pos);
                let count = self.adjacent_mines(pos);
                log::trace!("Flood revealed {:?}, adjacent mines: {}", pos, count);

                if count == 0 {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    fn reveal_mines(&mut self) {
        let layout = &self.mine_layout;
        for ((row, col), revealed) in self.revealed.indexed_iter_mut() {
            if layout.contains_mine((row as Coord, col as Coord)) {
                *revealed = true;
            }
        }
    }
}

/// Wire form of [`Board`], checked for a consistent shape and counts on load.
#[derive(Deserialize)]
struct BoardData {
    config: GameConfig,
    mine_layout: MineLayout,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    phase: Phase,
}

impl TryFrom<BoardData> for Board {
    type Error = GameError;

    fn try_from(data: BoardData) -> Result<Self> {
        let mut board = Self::new(data.config)?;
        let config = board.config;

        if data.mine_layout.size() != config.size || data.mine_layout.mine_count() != config.mines
        {
            return Err(GameError::InvalidConfig(
                "mine layout does not match the board configuration",
            ));
        }
        if data.revealed.dim() != board.revealed.dim() {
            return Err(GameError::InvalidConfig(
                "revealed grid does not match the board size",
            ));
        }

        let revealed_safe = data
            .revealed
            .indexed_iter()
            .filter(|&((row, col), &revealed)| {
                revealed && !data.mine_layout.contains_mine((row as Coord, col as Coord))
            })
            .count() as CellCount;
        if revealed_safe != data.revealed_count {
            return Err(GameError::InvalidConfig(
                "revealed count does not match the revealed grid",
            ));
        }
        if (revealed_safe == config.safe_cells()) != (data.phase == Phase::Won) {
            return Err(GameError::InvalidConfig(
                "phase does not match the revealed cells",
            ));
        }

        board.mine_layout = data.mine_layout;
        board.revealed = data.revealed;
        board.revealed_count = data.revealed_count;
        board.phase = data.phase;
        board.compute_adjacency();
        Ok(board)
    }
}
