use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::Position;
use itertools::iproduct;
use ndarray::Array2;
use rand::Rng;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub is_mine: bool,
    pub is_hidden: bool,
    pub is_flagged: bool,
}

impl Cell {
    fn new(position: Position, is_mine: bool) -> Self {
        Self {
            position,
            is_mine,
            is_hidden: true,
            is_flagged: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        !self.is_hidden
    }
}

/// An immutable snapshot of the board.
///
/// Every operation that changes a cell returns a new `Grid` and leaves the
/// receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: HashMap<Position, Cell>,
    width: u32,
    height: u32,
    mine_count: u32,
}

impl Grid {
    /// Generates a grid with mines placed uniformly at random.
    pub fn generate(config: &GameConfig) -> Result<Self> {
        Self::generate_with_rng(config, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut mines = HashSet::with_capacity(config.mine_count as usize);
        while mines.len() < config.mine_count as usize {
            let x = rng.gen_range(0..config.width) as i32;
            let y = rng.gen_range(0..config.height) as i32;
            mines.insert(Position::new(x, y));
        }

        log::debug!(
            "generated {}x{} grid with {} mines",
            config.width,
            config.height,
            config.mine_count
        );
        Ok(Self::materialize(config, &mines))
    }

    /// Builds a grid with a fixed mine layout.
    ///
    /// Rejects layouts with duplicate or out-of-range mines, or that leave
    /// no safe cell.
    pub fn with_mines<I>(width: u32, height: u32, mines: I) -> Result<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let requested: Vec<Position> = mines.into_iter().collect();
        let config = GameConfig::new(width, height, requested.len() as u32);
        config.validate()?;

        let unique: HashSet<Position> = requested.iter().copied().collect();
        let in_bounds = unique.iter().all(|&pos| contains(width, height, pos));
        if unique.len() != requested.len() || !in_bounds {
            return Err(GameError::InvalidConfiguration {
                width,
                height,
                mines: config.mine_count,
            });
        }

        Ok(Self::materialize(&config, &unique))
    }

    fn materialize(config: &GameConfig, mines: &HashSet<Position>) -> Self {
        let cells = positions(config.width, config.height)
            .map(|pos| (pos, Cell::new(pos, mines.contains(&pos))))
            .collect();

        Self {
            cells,
            width: config.width,
            height: config.height,
            mine_count: config.mine_count,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new(self.width, self.height, self.mine_count)
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    /// All cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        positions(self.width, self.height)
    }

    /// Existing cells adjacent to `pos`. Positions off the grid are skipped.
    pub fn neighbors(&self, pos: Position) -> Vec<&Cell> {
        pos.neighbors().filter_map(|p| self.cells.get(&p)).collect()
    }

    pub fn neighbor_mine_count(&self, pos: Position) -> u8 {
        pos.neighbors()
            .filter_map(|p| self.cells.get(&p))
            .filter(|cell| cell.is_mine)
            .count() as u8
    }

    /// Neighbor mine counts for every cell, indexed `[y, x]`.
    pub fn mine_counts(&self) -> Array2<u8> {
        Array2::from_shape_fn((self.height as usize, self.width as usize), |(y, x)| {
            self.neighbor_mine_count(Position::new(x as i32, y as i32))
        })
    }

    pub fn flags_placed(&self) -> u32 {
        self.cells.values().filter(|cell| cell.is_flagged).count() as u32
    }

    /// Returns a copy with the cell at `pos` uncovered.
    pub fn reveal(&self, pos: Position) -> Grid {
        self.with_cell(pos, |cell| cell.is_hidden = false)
    }

    /// Returns a copy with the flag on the cell at `pos` flipped.
    pub fn toggle_flag(&self, pos: Position) -> Grid {
        self.with_cell(pos, |cell| cell.is_flagged = !cell.is_flagged)
    }

    /// Returns a copy with every cell uncovered.
    pub fn reveal_all(&self) -> Grid {
        let mut next = self.clone();
        for cell in next.cells.values_mut() {
            cell.is_hidden = false;
        }
        next
    }

    fn with_cell(&self, pos: Position, update: impl FnOnce(&mut Cell)) -> Grid {
        let mut next = self.clone();
        if let Some(cell) = next.cells.get_mut(&pos) {
            update(cell);
        }
        next
    }

    /// Uncovers a cell in place, returning whether it was hidden.
    pub(crate) fn uncover(&mut self, pos: Position) -> bool {
        match self.cells.get_mut(&pos) {
            Some(cell) if cell.is_hidden => {
                cell.is_hidden = false;
                true
            }
            _ => false,
        }
    }
}

fn positions(width: u32, height: u32) -> impl Iterator<Item = Position> {
    iproduct!(0..height as i32, 0..width as i32).map(|(y, x)| Position::new(x, y))
}

fn contains(width: u32, height: u32, pos: Position) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < width && (pos.y as u32) < height
}
