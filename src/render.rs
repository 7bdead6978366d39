use macroquad::prelude::*;

use crate::grid::{Cell, Grid};

/// Colours shared by everything drawn on the playfield.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BLACK,
            border: Color::from_rgba(93, 216, 228, 255),
        }
    }
}

/// Something cells can be painted onto.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_cell(&mut self, cell: Cell, color: Color);
    fn outline_cell(&mut self, cell: Cell, color: Color);

    /// Filled cell with a one pixel border, the way every entity is drawn.
    fn draw_cell(&mut self, cell: Cell, color: Color, border: Color) {
        self.fill_cell(cell, color);
        self.outline_cell(cell, border);
    }
}

pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette);
}

/// Draws straight onto the macroquad back buffer, one pixel per field pixel.
pub struct MacroquadSurface {
    cell_size: f32,
}

impl MacroquadSurface {
    pub fn new(grid: &Grid) -> Self {
        Self { cell_size: grid.cell_size as f32 }
    }
}

impl Surface for MacroquadSurface {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_cell(&mut self, cell: Cell, color: Color) {
        draw_rectangle(cell.x as f32, cell.y as f32, self.cell_size, self.cell_size, color);
    }

    fn outline_cell(&mut self, cell: Cell, color: Color) {
        draw_rectangle_lines(cell.x as f32, cell.y as f32, self.cell_size, self.cell_size, 1.0, color);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{DrawOp, RecordingSurface};
    use super::*;

    #[test]
    fn test_draw_cell_fills_then_outlines() {
        let mut surface = RecordingSurface::default();
        let cell = Cell::new(40, 60);
        surface.draw_cell(cell, RED, WHITE);
        assert_eq!(surface.ops, vec![DrawOp::Fill(cell, RED), DrawOp::Outline(cell, WHITE)]);
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.background, BLACK);
        assert_eq!(palette.border, Color::from_rgba(93, 216, 228, 255));
    }
}
