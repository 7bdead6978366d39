use log::warn;
use macroquad::color::Color;
use rand::Rng;
use std::collections::HashSet;

use crate::grid::{Cell, Grid};
use crate::render::{Drawable, Palette, Surface};

pub struct Apple {
    position: Cell,
    color: Color,
}

impl Apple {
    pub fn new(position: Cell, color: Color) -> Self {
        Self { position, color }
    }

    /// An apple on a random cell outside `avoid`.
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, color: Color, avoid: &HashSet<Cell>, rng: &mut R) -> Self {
        let mut apple = Self::new(grid.random_cell(rng), color);
        apple.relocate(grid, avoid, rng);
        apple
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves to a uniformly random cell not in `avoid`. Returns false and
    /// stays put when every cell is taken.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, avoid: &HashSet<Cell>, rng: &mut R) -> bool {
        if avoid.len() >= grid.cell_count() && grid.cells().all(|c| avoid.contains(&c)) {
            warn!("no free cell left for the apple, keeping it at {}", self.position);
            return false;
        }
        loop {
            let cell = grid.random_cell(rng);
            if !avoid.contains(&cell) {
                self.position = cell;
                return true;
            }
        }
    }
}

impl Drawable for Apple {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) {
        surface.draw_cell(self.position, self.color, palette.border);
    }
}
