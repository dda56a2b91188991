use rand::prelude::*;

use super::*;

/// Draws allowed per cell before placement is abandoned.
pub const DEFAULT_ATTEMPTS_PER_CELL: CellCount = 64;

/// Purely random placement by rejection sampling: draw a uniform cell and keep it unless it already holds a mine.
///
/// There is no first-click safety, every layout with the requested mine count is equally likely.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
    attempts_per_cell: CellCount,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            attempts_per_cell: DEFAULT_ATTEMPTS_PER_CELL,
        }
    }

    /// Overrides the retry bound, clamped to at least one draw per cell.
    pub fn with_attempts_per_cell(mut self, attempts_per_cell: CellCount) -> Self {
        self.attempts_per_cell = attempts_per_cell.max(1);
        self
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout> {
        let config = GameConfig::new(config.size, config.mines)?;
        let (rows, cols) = config.size;
        let max_attempts = u64::from(config.total_cells()) * u64::from(self.attempts_per_cell);

        let mut layout = MineLayout::empty(config.size);
        let mut attempts = 0u64;
        while layout.mine_count() < config.mines {
            if attempts >= max_attempts {
                log::warn!(
                    "Mine placement exhausted after {} draws, placed {} of {}",
                    attempts,
                    layout.mine_count(),
                    config.mines
                );
                return Err(GameError::PlacementExhausted {
                    placed: layout.mine_count(),
                    requested: config.mines,
                });
            }
            attempts += 1;

            let coords = (self.rng.random_range(0..rows), self.rng.random_range(0..cols));
            layout.insert(coords);
        }

        log::debug!(
            "Placed {} mines on {}x{} board in {} draws",
            config.mines,
            rows,
            cols,
            attempts
        );
        Ok(layout)
    }
}
