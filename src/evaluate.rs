use crate::flood::flood_fill;
use crate::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub status: GameStatus,
    pub grid: Grid,
}

/// Settles a candidate grid and classifies it.
///
/// The grid is flood-filled first. A revealed mine loses and a board with no
/// hidden safe cells wins; both uncover the whole board. Loss is checked
/// before win.
pub fn evaluate(grid: &Grid) -> Evaluation {
    let filled = flood_fill(grid);

    if filled.cells().any(|cell| cell.is_mine && cell.is_revealed()) {
        log::debug!("mine revealed, game lost");
        return Evaluation {
            status: GameStatus::Lost,
            grid: filled.reveal_all(),
        };
    }

    if filled
        .cells()
        .all(|cell| (cell.is_mine && cell.is_hidden) || cell.is_revealed())
    {
        log::debug!("all safe cells revealed, game won");
        return Evaluation {
            status: GameStatus::Won,
            grid: filled.reveal_all(),
        };
    }

    Evaluation {
        status: GameStatus::InProgress,
        grid: filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_revealing_mine_loses_and_reveals_all() {
        let grid = Grid::with_mines(3, 3, [p(1, 1)]).unwrap();
        let result = evaluate(&grid.reveal(p(1, 1)));

        assert_eq!(result.status, GameStatus::Lost);
        assert!(result.grid.cells().all(|c| c.is_revealed()));
    }

    #[test]
    fn test_last_safe_cell_wins() {
        let grid = Grid::with_mines(2, 1, [p(0, 0)]).unwrap();
        let result = evaluate(&grid.reveal(p(1, 0)));

        assert_eq!(result.status, GameStatus::Won);
        assert!(result.grid.cells().all(|c| c.is_revealed()));
    }

    #[test]
    fn test_empty_board_cascades_to_win() {
        let grid = Grid::with_mines(3, 3, Vec::<Position>::new()).unwrap();
        for pos in grid.positions() {
            let result = evaluate(&grid.reveal(pos));
            assert_eq!(result.status, GameStatus::Won);
            assert_eq!(result.grid.cells().filter(|c| c.is_revealed()).count(), 9);
        }
    }

    #[test]
    fn test_numbered_reveal_stays_in_progress() {
        let grid = Grid::with_mines(3, 3, [p(0, 0)]).unwrap();
        let candidate = grid.reveal(p(1, 1));
        let result = evaluate(&candidate);

        assert_eq!(result.status, GameStatus::InProgress);
        assert_eq!(result.grid, candidate);
    }

    #[test]
    fn test_flag_toggle_keeps_game_in_progress() {
        let grid = Grid::with_mines(3, 3, [p(0, 0)]).unwrap();
        let result = evaluate(&grid.toggle_flag(p(2, 2)));

        assert_eq!(result.status, GameStatus::InProgress);
        let cell = result.grid.cell(p(2, 2)).unwrap();
        assert!(cell.is_hidden);
        assert!(cell.is_flagged);
    }

    #[test]
    fn test_loss_takes_priority_over_win() {
        // Every safe cell is open but a mine is too.
        let grid = Grid::with_mines(2, 1, [p(0, 0)])
            .unwrap()
            .reveal(p(1, 0))
            .reveal(p(0, 0));
        assert_eq!(evaluate(&grid).status, GameStatus::Lost);
    }

    #[test]
    fn test_evaluate_does_not_mutate_input() {
        let candidate = Grid::with_mines(3, 3, [p(2, 2)]).unwrap().reveal(p(0, 0));
        let before = candidate.clone();
        let _ = evaluate(&candidate);
        assert_eq!(candidate, before);
    }

    #[test]
    fn test_status_is_finished() {
        assert!(!GameStatus::InProgress.is_finished());
        assert!(GameStatus::Won.is_finished());
        assert!(GameStatus::Lost.is_finished());
    }
}
