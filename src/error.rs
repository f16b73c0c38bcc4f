use crate::GameStatus;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {mines} mines on a {width}x{height} board")]
    InvalidConfiguration { width: u32, height: u32, mines: u32 },
    #[error("Game is over ({0:?}), no further actions are accepted")]
    GameOver(GameStatus),
}

pub type Result<T> = std::result::Result<T, GameError>;
