//! various types that are shared between the snake core and the platform layer
use crate::grid::Position;
use std::fmt;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x offset
    pub x: i32,
    /// y offset
    pub y: i32,
}

/// The axis a move travels along. Movement only ever changes one of them per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    #[allow(missing_docs)]
    Horizontal,
    #[allow(missing_docs)]
    Vertical,
}

/// Represents a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Right,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Left => write!(f, "left"),
            Move::Right => write!(f, "right"),
            Move::Up => write!(f, "up"),
            Move::Down => write!(f, "down"),
        }
    }
}

impl Move {
    /// convert this move to a vector. Up is towards increasing y.
    pub fn to_vector(self) -> Vector {
        match self {
            Move::Left => Vector { x: -1, y: 0 },
            Move::Right => Vector { x: 1, y: 0 },
            Move::Up => Vector { x: 0, y: 1 },
            Move::Down => Vector { x: 0, y: -1 },
        }
    }

    /// returns a vec of all possible moves
    pub fn all() -> Vec<Move> {
        vec![Move::Up, Move::Down, Move::Left, Move::Right]
    }

    /// the axis this move travels along
    pub fn axis(&self) -> Axis {
        match self {
            Move::Left | Move::Right => Axis::Horizontal,
            Move::Up | Move::Down => Axis::Vertical,
        }
    }

    /// +1 when travelling towards increasing coordinates, -1 otherwise
    pub fn sign(&self) -> i32 {
        match self {
            Move::Right | Move::Up => 1,
            Move::Left | Move::Down => -1,
        }
    }

    /// checks if a given move is not opposite this move. e.g. Up is not opposite to Left, but is opposite to Down
    pub fn is_not_opposite(&self, other: &Move) -> bool {
        !matches!(
            (self, other),
            (Move::Up, Move::Down)
                | (Move::Down, Move::Up)
                | (Move::Left, Move::Right)
                | (Move::Right, Move::Left)
        )
    }
}

/// Discrete events the platform layer forwards to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// a direction key was pressed
    Turn(Move),
    /// pause or resume play
    PauseToggle,
    /// restart the current level, or go back to the start screen after winning
    Restart,
    /// leave the start screen / level intro
    Confirm,
}

/// What a drawn cell represents, so the renderer can pick a texture for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    #[allow(missing_docs)]
    Food,
    /// any body segment other than the head
    Body,
    #[allow(missing_docs)]
    Head,
}

/// Capability a platform layer implements to put cells on screen. The core
/// never talks to a graphics API itself, it only hands out grid positions.
pub trait CellRenderer {
    /// draw `sprite` at the given grid cell
    fn draw_cell(&mut self, position: Position, sprite: Sprite);
}
