//! free cell bookkeeping for food placement
use fxhash::FxHashSet;

use super::{CellIndex, Grid, Position};

/// Returns every index of `all_cells` that no `occupied` cell maps to, keeping
/// the order of `all_cells`. Empty when the board is full.
pub fn free_cells<'a>(
    grid: &Grid,
    all_cells: &[CellIndex],
    occupied: impl IntoIterator<Item = &'a Position>,
) -> Vec<CellIndex> {
    let busy: FxHashSet<CellIndex> = occupied
        .into_iter()
        .map(|pos| grid.to_index(*pos))
        .collect();
    all_cells
        .iter()
        .copied()
        .filter(|idx| !busy.contains(idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_three_cell_snake_leaves_97() {
        let grid = Grid::new(10);
        let body = vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)];
        let free = free_cells(&grid, &grid.all_cells(), &body);
        assert_eq!(free.len(), 97);
        assert!(!free.contains(&CellIndex(0)));
        assert!(!free.contains(&CellIndex(1)));
        assert!(!free.contains(&CellIndex(2)));
        assert_eq!(free[0], CellIndex(3));
    }

    #[test]
    fn test_partitions_field() {
        let grid = Grid::new(6);
        let all = grid.all_cells();
        let body = vec![
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(2, 2),
            Position::new(3, 2),
            Position::new(3, 3),
        ];
        let free = free_cells(&grid, &all, &body);
        let occupied = body.iter().map(|p| grid.to_index(*p)).collect_vec();

        assert!(free.iter().all(|idx| !occupied.contains(idx)));
        let union = free.iter().chain(occupied.iter()).copied().sorted().collect_vec();
        assert_eq!(union, all);
    }

    #[test]
    fn test_keeps_input_order() {
        let grid = Grid::new(4);
        let shuffled = vec![CellIndex(9), CellIndex(2), CellIndex(5), CellIndex(0)];
        let free = free_cells(&grid, &shuffled, &[Position::new(1, 1)]);
        assert_eq!(free, vec![CellIndex(9), CellIndex(2), CellIndex(0)]);
    }

    #[test]
    fn test_full_board_is_empty() {
        let grid = Grid::new(10);
        let body = grid.all_cells().into_iter().map(|c| grid.to_position(c)).collect_vec();
        assert!(free_cells(&grid, &grid.all_cells(), &body).is_empty());
    }
}
