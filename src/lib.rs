pub mod config;
pub mod error;
pub mod evaluate;
pub mod flood;
pub mod game;
pub mod grid;
pub mod position;

pub use config::GameConfig;
pub use error::GameError;
pub use evaluate::{evaluate, Evaluation, GameStatus};
pub use flood::flood_fill;
pub use game::{Action, Game};
pub use grid::{Cell, Grid};
pub use position::Position;
