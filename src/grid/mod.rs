//! Grid coordinates and their conversions to and from linear cell indices.
//!
//! The field is always square. A [`Position`] is a committed cell, a
//! [`FrontPosition`] is the interpolated head between two ticks and may sit
//! outside the field for a frame to signal a wall hit.
pub mod occupancy;

pub use occupancy::free_cells;

use crate::types::{Axis, Move, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A committed cell on the field
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    #[allow(missing_docs)]
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// the position offset by `v`
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }

    /// the neighbouring cell in the direction of `mv`
    pub fn neighbour(&self, mv: Move) -> Position {
        self.add_vec(mv.to_vector())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Sub-cell head position, advanced continuously through a tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrontPosition {
    #[allow(missing_docs)]
    pub x: f32,
    #[allow(missing_docs)]
    pub y: f32,
}

impl FrontPosition {
    /// moves `amount` cells along the axis of `mv`
    pub fn advanced(self, mv: Move, amount: f32) -> Self {
        let delta = mv.sign() as f32 * amount;
        match mv.axis() {
            Axis::Horizontal => FrontPosition {
                x: self.x + delta,
                y: self.y,
            },
            Axis::Vertical => FrontPosition {
                x: self.x,
                y: self.y + delta,
            },
        }
    }

    /// euclidean distance to the centre of a committed cell
    pub fn distance_to(&self, pos: Position) -> f32 {
        let dx = self.x - pos.x as f32;
        let dy = self.y - pos.y as f32;
        dx.hypot(dy)
    }
}

impl From<Position> for FrontPosition {
    fn from(pos: Position) -> Self {
        FrontPosition {
            x: pos.x as f32,
            y: pos.y as f32,
        }
    }
}

/// wrapper type for an index in to the field
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct CellIndex(pub u16);

impl CellIndex {
    /// build a CellIndex from a usize
    pub fn from_usize(u: usize) -> Self {
        Self(u as u16)
    }

    /// get a usize from a CellIndex
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

/// A square field of `size * size` cells
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: u8,
}

impl Default for Grid {
    fn default() -> Self {
        Grid { size: 10 }
    }
}

impl Grid {
    /// makes a new grid, panics on an empty field
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "a grid needs at least one cell");
        Grid { size }
    }

    /// cells per side
    pub fn size(&self) -> u8 {
        self.size
    }

    /// total number of cells on the field
    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// whether `pos` lies on the field
    pub fn contains(&self, pos: Position) -> bool {
        let size = self.size as i32;
        pos.x >= 0 && pos.y >= 0 && pos.x < size && pos.y < size
    }

    /// converts a position to its linear index, `y * size + x`.
    ///
    /// # Panics
    ///
    /// When `pos` is off the field. Bounds are the caller's job.
    pub fn to_index(&self, pos: Position) -> CellIndex {
        assert!(
            self.contains(pos),
            "position {} is off a {}x{} grid",
            pos,
            self.size,
            self.size
        );
        CellIndex::from_usize(pos.y as usize * self.size as usize + pos.x as usize)
    }

    /// converts a linear index back to a position.
    ///
    /// # Panics
    ///
    /// When the index is not smaller than `cell_count()`.
    pub fn to_position(&self, idx: CellIndex) -> Position {
        assert!(
            idx.as_usize() < self.cell_count(),
            "cell index {} is off a {}x{} grid",
            idx.as_usize(),
            self.size,
            self.size
        );
        let width = self.size as usize;
        Position {
            x: (idx.as_usize() % width) as i32,
            y: (idx.as_usize() / width) as i32,
        }
    }

    /// every index on the field, ascending
    pub fn all_cells(&self) -> Vec<CellIndex> {
        (0..self.cell_count()).map(CellIndex::from_usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::default();
        for y in 0..10 {
            for x in 0..10 {
                let pos = Position::new(x, y);
                assert_eq!(grid.to_position(grid.to_index(pos)), pos);
            }
        }
    }

    #[test]
    fn test_index_layout() {
        let grid = Grid::new(10);
        assert_eq!(grid.to_index(Position::new(3, 0)), CellIndex(3));
        assert_eq!(grid.to_index(Position::new(0, 1)), CellIndex(10));
        assert_eq!(grid.to_index(Position::new(9, 9)), CellIndex(99));
        assert_eq!(grid.to_position(CellIndex(47)), Position::new(7, 4));
    }

    #[test]
    #[should_panic(expected = "off a 10x10 grid")]
    fn test_off_grid_position_panics() {
        Grid::new(10).to_index(Position::new(10, 0));
    }

    #[test]
    #[should_panic(expected = "off a 10x10 grid")]
    fn test_off_grid_index_panics() {
        Grid::new(10).to_position(CellIndex(100));
    }

    #[test]
    fn test_all_cells() {
        let cells = Grid::new(3).all_cells();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells.first(), Some(&CellIndex(0)));
        assert_eq!(cells.last(), Some(&CellIndex(8)));
    }

    #[test]
    fn test_front_advances_on_one_axis() {
        let front = FrontPosition::from(Position::new(2, 5));
        assert_eq!(front.advanced(Move::Right, 0.25), FrontPosition { x: 2.25, y: 5.0 });
        assert_eq!(front.advanced(Move::Down, 0.5), FrontPosition { x: 2.0, y: 4.5 });
        assert_eq!(front.advanced(Move::Right, 0.5).distance_to(Position::new(3, 5)), 0.5);
    }
}
