//! Hands occupied cells to a [`CellRenderer`], plus a text renderer for debugging
use std::fmt;

use itertools::Itertools;
use rand::Rng;

use crate::grid::{Grid, Position};
use crate::session::GameSession;
use crate::types::{CellRenderer, Sprite};

impl<R: Rng> GameSession<R> {
    /// Draws the food, when there is any, then every body segment tail
    /// first. The head goes out as [`Sprite::Head`].
    pub fn render(&self, renderer: &mut impl CellRenderer) {
        if let Some(food) = self.food_cell() {
            renderer.draw_cell(food, Sprite::Food);
        }
        let cells = self.snake().cells();
        let head_index = cells.len() - 1;
        for (i, cell) in cells.iter().enumerate() {
            let sprite = if i == head_index {
                Sprite::Head
            } else {
                Sprite::Body
            };
            renderer.draw_cell(*cell, sprite);
        }
    }
}

/// Renders cells into a character grid, top row first
#[derive(Debug, Clone)]
pub struct TextRenderer {
    grid: Grid,
    chars: Vec<char>,
}

impl TextRenderer {
    /// an empty field of `.`
    pub fn new(grid: Grid) -> Self {
        TextRenderer {
            grid,
            chars: vec!['.'; grid.cell_count()],
        }
    }

    /// the character drawn at `pos`, `None` off the field
    pub fn char_at(&self, pos: Position) -> Option<char> {
        if self.grid.contains(pos) {
            Some(self.chars[self.grid.to_index(pos).as_usize()])
        } else {
            None
        }
    }
}

impl CellRenderer for TextRenderer {
    fn draw_cell(&mut self, position: Position, sprite: Sprite) {
        // off-field cells are skipped
        if !self.grid.contains(position) {
            return;
        }
        let c = match sprite {
            Sprite::Food => 'f',
            Sprite::Body => 's',
            Sprite::Head => 'H',
        };
        self.chars[self.grid.to_index(position).as_usize()] = c;
    }
}

impl fmt::Display for TextRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size() as usize;
        for row in self.chars.chunks(size).rev() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

impl<R: Rng> fmt::Display for GameSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = TextRenderer::new(*self.grid());
        self.render(&mut text);
        write!(f, "{}", text)?;
        write!(
            f,
            "level: {} eaten: {}/{} length: {} phase: {:?}",
            self.level(),
            self.eaten(),
            self.level_settings().food_quota,
            self.snake().len(),
            self.phase()
        )
    }
}
