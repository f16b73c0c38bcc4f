use crate::error::{GameError, Result};

pub const DEFAULT_WIDTH: u32 = 30;
pub const DEFAULT_HEIGHT: u32 = 16;
pub const DEFAULT_MINES: u32 = 50;

/// Board dimensions and mine count for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub mine_count: u32,
}

impl GameConfig {
    pub fn new(width: u32, height: u32, mine_count: u32) -> Self {
        Self {
            width,
            height,
            mine_count,
        }
    }

    /// Number of cells, or `None` if the area does not fit in a `u32`.
    pub fn area(&self) -> Option<u32> {
        self.width.checked_mul(self.height)
    }

    /// Checks that the board is non-empty, addressable by `Position`, and
    /// leaves at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        let addressable = i32::try_from(self.width).is_ok() && i32::try_from(self.height).is_ok();
        match self.area() {
            Some(area) if addressable && area > 0 && self.mine_count < area => Ok(()),
            _ => Err(GameError::InvalidConfiguration {
                width: self.width,
                height: self.height,
                mines: self.mine_count,
            }),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height, config.mine_count), (30, 16, 50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(GameConfig::new(3, 3, 8).validate().is_ok());
        assert!(GameConfig::new(3, 3, 0).validate().is_ok());
        assert!(GameConfig::new(3, 3, 9).validate().is_err());
        assert!(GameConfig::new(0, 3, 0).validate().is_err());
        assert!(GameConfig::new(3, 0, 0).validate().is_err());
        assert!(GameConfig::new(u32::MAX, 2, 1).validate().is_err());
        assert!(GameConfig::new(1 << 31, 1, 0).validate().is_err());
        assert!(GameConfig::new(1, 1 << 31, 0).validate().is_err());
    }

    #[test]
    fn test_validate_error_carries_parameters() {
        let err = GameConfig::new(2, 2, 4).validate().unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidConfiguration {
                width: 2,
                height: 2,
                mines: 4
            }
        );
    }
}
