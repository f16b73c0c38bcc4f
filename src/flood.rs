use crate::{Grid, Position};
use std::collections::VecDeque;

/// Opens every safe region connected to an already revealed zero cell.
///
/// A revealed, non-mine cell with no neighboring mines uncovers all of its
/// non-mine neighbors; any of those that are zero cells continue the cascade.
/// Cells next to a mine are uncovered but do not propagate. The result is a
/// fixed point: running it again changes nothing.
pub fn flood_fill(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    let mut queue: VecDeque<Position> = grid
        .cells()
        .filter(|cell| cell.is_revealed() && !cell.is_mine)
        .map(|cell| cell.position)
        .filter(|&pos| grid.neighbor_mine_count(pos) == 0)
        .collect();

    let mut opened = 0usize;
    while let Some(pos) = queue.pop_front() {
        let safe_neighbors: Vec<Position> = next
            .neighbors(pos)
            .into_iter()
            .filter(|cell| !cell.is_mine && cell.is_hidden)
            .map(|cell| cell.position)
            .collect();

        for neighbor in safe_neighbors {
            if next.uncover(neighbor) {
                opened += 1;
                if next.neighbor_mine_count(neighbor) == 0 {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    log::trace!("flood fill opened {} cells", opened);
    next
}
