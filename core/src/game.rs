use crate::*;

/// A running minesweeper session: the current board, its timer, and the best time carried across resets.
#[derive(Clone, Debug)]
pub struct Game<G = RandomMineGenerator> {
    board: Board,
    stats: SessionStats,
    scoreboard: Scoreboard,
    generator: G,
}

impl Game<RandomMineGenerator> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomMineGenerator::new(seed))
    }
}

impl<G: MineGenerator> Game<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let board = Board::generate(config, &mut generator)?;
        log::debug!(
            "New game {}x{} with {} mines",
            config.rows(),
            config.cols(),
            config.mines
        );
        Ok(Self {
            board,
            stats: SessionStats::default(),
            scoreboard: Scoreboard::new(),
            generator,
        })
    }

    /// Carries a best time over from an earlier game.
    pub fn with_scoreboard(mut self, scoreboard: Scoreboard) -> Self {
        self.scoreboard = scoreboard;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn phase(&self) -> Phase {
        self.board.phase()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn elapsed(&self) -> f64 {
        self.stats.elapsed
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn best_time(&self) -> Option<f64> {
        self.scoreboard.best_time()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellState> {
        self.board.cell_at(coords)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, CellState)> + '_ {
        self.board.iter_cells()
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let outcome = self.board.reveal(coords);
        if matches!(outcome, RevealOutcome::Won | RevealOutcome::Lost) {
            self.on_game_end();
        }
        outcome
    }

    /// Advances the session timer while the game is still being played.
    pub fn tick(&mut self, delta_secs: f64) {
        if self.board.is_finished() {
            return;
        }
        if !delta_secs.is_finite() || delta_secs < 0.0 {
            log::warn!("Ignoring invalid tick delta {}", delta_secs);
            return;
        }
        self.stats.elapsed += delta_secs;
    }

    /// Records the session time once the game has ended, returns whether it became the new best.
    ///
    /// Runs at most once per session, later calls are no-ops.
    pub fn on_game_end(&mut self) -> bool {
        if !self.board.is_finished() || self.stats.score_recorded {
            return false;
        }
        self.stats.score_recorded = true;
        log::debug!(
            "Game ended {:?} after {:.3}s",
            self.board.phase(),
            self.stats.elapsed
        );
        self.scoreboard.record(self.stats.elapsed)
    }

    /// Starts a new session on a fresh layout with the same configuration.
    ///
    /// On error the current session is left untouched.
    pub fn reset(&mut self) -> Result<()> {
        let board = Board::generate(self.board.config(), &mut self.generator)?;
        self.board = board;
        self.stats = SessionStats::default();
        log::debug!("Game reset, best time {:?}", self.scoreboard.best_time());
        Ok(())
    }

    /// Runs a translated input command, returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Reveal(coords) => Ok(self.reveal(coords).has_update()),
            Command::Reset => self.reset().map(|()| true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(size: Coord2, mines: &[Coord2]) -> Game<FixedMineGenerator> {
        let generator = FixedMineGenerator::from_mine_coords(size, mines).unwrap();
        let config = GameConfig::new(size, generator.layout().mine_count()).unwrap();
        Game::new(config, generator).unwrap()
    }

    fn win(game: &mut Game<FixedMineGenerator>) {
        let safe: alloc::vec::Vec<_> = game
            .iter_cells()
            .filter(|(_, cell)| !cell.has_mine && !cell.revealed)
            .map(|(coords, _)| coords)
            .collect();
        for coords in safe {
            game.reveal(coords);
        }
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = Game::with_seed(GameConfig::new_unchecked((0, 10), 5), 0);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn timer_runs_only_while_playing() {
        let mut game = scripted((3, 3), &[(1, 1)]);
        game.tick(0.5);
        game.tick(0.25);
        assert_eq!(game.elapsed(), 0.75);

        game.reveal((1, 1));
        game.tick(10.0);
        assert_eq!(game.elapsed(), 0.75);
    }

    #[test]
    fn invalid_ticks_are_dropped() {
        let mut game = scripted((3, 3), &[(1, 1)]);
        game.tick(1.0);
        game.tick(-2.0);
        game.tick(f64::NAN);
        game.tick(f64::INFINITY);
        assert_eq!(game.elapsed(), 1.0);
    }

    #[test]
    fn win_records_best_time() {
        let mut game = scripted((3, 3), &[(1, 1)]);
        game.tick(12.0);
        win(&mut game);

        assert_eq!(game.best_time(), Some(12.0));
        assert!(game.stats().score_recorded);
    }

    #[test]
    fn game_end_is_recorded_once() {
        let mut game = scripted((3, 3), &[(1, 1)]);
        game.tick(5.0);
        assert!(!game.on_game_end());

        game.reveal((1, 1));
        assert_eq!(game.best_time(), Some(5.0));
        assert!(!game.on_game_end());
        assert_eq!(game.reveal((0, 0)), RevealOutcome::NoChange);
        assert_eq!(game.best_time(), Some(5.0));
    }

    #[test]
    fn best_time_survives_reset_and_only_decreases() {
        let mut game = scripted((3, 3), &[(1, 1)]);
        game.tick(20.0);
        win(&mut game);

        game.reset().unwrap();
        game.tick(30.0);
        win(&mut game);
        assert_eq!(game.best_time(), Some(20.0));

        game.reset().unwrap();
        game.tick(8.0);
        win(&mut game);
        assert_eq!(game.best_time(), Some(8.0));
    }

    #[test]
    fn reset_starts_a_fresh_session() {
        let mut game = Game::with_seed(GameConfig::classic(), 11).unwrap();
        let first_layout = game.board().mine_layout().clone();
        game.tick(3.0);
        let mine = first_layout.iter_mines().next().unwrap();
        assert_eq!(game.reveal(mine), RevealOutcome::Lost);
        let best = game.best_time();

        game.reset().unwrap();

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.elapsed(), 0.0);
        assert!(!game.stats().score_recorded);
        assert!(game.iter_cells().all(|(_, cell)| !cell.revealed));
        assert_eq!(game.board().mine_layout().mine_count(), 15);
        assert_eq!(game.best_time(), best);
        assert_ne!(game.board().mine_layout(), &first_layout);
    }

    #[test]
    fn scoreboard_can_be_carried_between_games() {
        let mut first = scripted((3, 3), &[(1, 1)]);
        first.tick(9.0);
        win(&mut first);

        let second = scripted((3, 3), &[(0, 0)]).with_scoreboard(first.scoreboard());
        assert_eq!(second.best_time(), Some(9.0));
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut game = scripted((3, 3), &[(1, 1)]);

        assert_eq!(game.apply(Command::Reveal((0, 0))), Ok(true));
        assert_eq!(game.apply(Command::Reveal((0, 0))), Ok(false));
        assert!(game.cell_at((0, 0)).unwrap().revealed);

        assert_eq!(game.apply(Command::Reset), Ok(true));
        assert!(!game.cell_at((0, 0)).unwrap().revealed);
    }

    /// Hands out one layout, then reports exhaustion.
    struct OneShot(Option<MineLayout>);

    impl MineGenerator for OneShot {
        fn generate(&mut self, config: GameConfig) -> Result<MineLayout> {
            self.0.take().ok_or(GameError::PlacementExhausted {
                placed: 0,
                requested: config.mines,
            })
        }
    }

    #[test]
    fn failed_reset_keeps_current_session() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(2, 2)]).unwrap();
        let mut game = Game::new(GameConfig::new((3, 3), 1).unwrap(), OneShot(Some(layout))).unwrap();
        game.tick(4.0);
        assert_eq!(game.reveal((1, 1)), RevealOutcome::Continue);
        let board = game.board().clone();

        assert!(matches!(
            game.reset(),
            Err(GameError::PlacementExhausted { requested: 1, .. })
        ));
        assert_eq!(game.board(), &board);
        assert_eq!(game.elapsed(), 4.0);
    }
}
