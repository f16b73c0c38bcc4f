use crate::error::{GameError, Result};
use crate::{evaluate, GameConfig, GameStatus, Grid, Position};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

/// The current grid and status of one game.
///
/// A `Game` is a value: each action produces the next `Game` and the
/// previous one stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    status: GameStatus,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self::from_grid(Grid::generate(&config)?))
    }

    pub fn with_rng<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self> {
        Ok(Self::from_grid(Grid::generate_with_rng(&config, rng)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            config: grid.config(),
            grid,
            status: GameStatus::InProgress,
        }
    }

    /// Starts over with a freshly generated grid of the same configuration.
    pub fn new_game(&self) -> Result<Self> {
        Self::new(self.config)
    }

    pub fn perform_action(&self, pos: Position, action: Action) -> Result<Self> {
        if self.status.is_finished() {
            return Err(GameError::GameOver(self.status));
        }

        let candidate = match (action, self.grid.cell(pos)) {
            (Action::Reveal, Some(cell)) if cell.is_hidden => self.grid.reveal(pos),
            (Action::Flag, Some(cell)) if cell.is_hidden => self.grid.toggle_flag(pos),
            _ => return Ok(self.clone()),
        };

        let evaluation = evaluate(&candidate);
        if evaluation.status.is_finished() {
            log::info!("game finished: {:?}", evaluation.status);
        }

        Ok(Self {
            config: self.config,
            grid: evaluation.grid,
            status: evaluation.status,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.grid.dimensions()
    }

    pub fn flags_placed(&self) -> u32 {
        self.grid.flags_placed()
    }

    /// Mines not yet accounted for by a flag. Negative when over-flagged.
    pub fn mines_remaining(&self) -> i64 {
        i64::from(self.config.mine_count) - i64::from(self.flags_placed())
    }
}
