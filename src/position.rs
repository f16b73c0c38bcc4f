use itertools::iproduct;

/// A grid coordinate. `x` is the column, `y` the row.
///
/// Coordinates are signed so that the neighborhood of an edge cell can be
/// expressed; positions outside a grid are valid values that simply have no
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The eight surrounding positions, whether or not they exist on a grid.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dy, dx)| (dx, dy) != (0, 0))
            .map(move |(dy, dx)| Position::new(self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.x, 5);
        assert_eq!(pos.y, 10);
    }

    #[test]
    fn test_neighbors() {
        let pos = Position::new(1, 1);
        let neighbors: Vec<Position> = pos.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&pos));
        for (x, y) in iproduct!(0..3, 0..3) {
            let other = Position::new(x, y);
            if other != pos {
                assert!(neighbors.contains(&other), "missing {other:?}");
            }
        }
    }

    #[test]
    fn test_neighbors_of_origin_leave_the_grid() {
        let negative = Position::new(0, 0)
            .neighbors()
            .filter(|p| p.x < 0 || p.y < 0)
            .count();
        assert_eq!(negative, 5);
    }
}
