use super::*;

/// Replays the same layout on every generation, used for scripted games and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    layout: MineLayout,
}

impl FixedMineGenerator {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        MineLayout::from_mine_coords(size, mine_coords).map(Self::new)
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout> {
        if self.layout.size() != config.size || self.layout.mine_count() != config.mines {
            return Err(GameError::InvalidConfig(
                "fixed layout does not match the board configuration",
            ));
        }
        Ok(self.layout.clone())
    }
}
