//! The snake body and the food it chases
pub mod food;

pub use food::{Food, FoodSpawner};

use crate::grid::{FrontPosition, Position};
use tracing::trace;

/// Slack on threshold comparisons, absorbs f32 rounding of the interpolated front
const DISTANCE_EPSILON: f32 = 1e-4;

/// Ordered body cells, tail first and head last. Never empty.
///
/// Alongside the committed cells the body keeps a [`FrontPosition`], the
/// head's predicted position inside the current tick. Eating and self
/// intersection are judged against the front, so a collision is caught on the
/// frame the tick completes instead of after the cell is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeBody {
    body: Vec<Position>,
    front: FrontPosition,
    intersection_threshold: f32,
}

impl SnakeBody {
    /// lays out `length` cells along row 0, tail at the origin and the head at `(length - 1, 0)`
    pub fn new(length: usize, intersection_threshold: f32) -> Self {
        let body = (0..length).map(|x| Position::new(x as i32, 0)).collect();
        Self::from_cells(body, intersection_threshold)
    }

    /// builds a snake from explicit cells, tail first.
    ///
    /// # Panics
    ///
    /// When `cells` is empty.
    pub fn from_cells(cells: Vec<Position>, intersection_threshold: f32) -> Self {
        assert!(!cells.is_empty(), "a snake needs at least one cell");
        let front = FrontPosition::from(cells[cells.len() - 1]);
        SnakeBody {
            body: cells,
            front,
            intersection_threshold,
        }
    }

    /// the last cell of the body
    pub fn head(&self) -> Position {
        *self.body.last().expect("a snake always has a head")
    }

    /// all cells, tail first
    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    #[allow(missing_docs, clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// whether any segment, head included, sits on `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// distance under which the front counts as touching a cell
    pub fn intersection_threshold(&self) -> f32 {
        self.intersection_threshold
    }

    /// records the interpolated head for the tick in progress. Never changes committed cells.
    pub fn set_front(&mut self, front: FrontPosition) {
        self.front = front;
    }

    /// the last front set, or the head if none was set yet
    pub fn front(&self) -> FrontPosition {
        self.front
    }

    /// Shifts every segment one place towards the head and puts the head on
    /// `new_head`. Returns false without touching the body when `new_head`
    /// already is the head, which happens right after eating.
    pub fn move_to(&mut self, new_head: Position) -> bool {
        if new_head == self.head() {
            return false;
        }
        let head_index = self.body.len() - 1;
        for i in 0..head_index {
            self.body[i] = self.body[i + 1];
        }
        self.body[head_index] = new_head;
        true
    }

    /// Grows the snake onto `food` when the front is within the threshold of
    /// it. The food cell becomes the new head.
    pub fn eat(&mut self, food: &Food) -> bool {
        if !self.touches(food.cell()) {
            return false;
        }
        trace!(food = %food.cell(), length = self.body.len() + 1, "snake ate");
        self.body.push(food.cell());
        true
    }

    /// whether the front is within the threshold of any segment but the head
    pub fn check_self_intersection(&self) -> bool {
        let neck_end = self.body.len() - 1;
        self.body[..neck_end].iter().any(|cell| self.touches(*cell))
    }

    fn touches(&self, cell: Position) -> bool {
        self.front.distance_to(cell) <= self.intersection_threshold + DISTANCE_EPSILON
    }
}
