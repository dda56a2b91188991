use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine layouts for new and reset boards.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout>;
}
