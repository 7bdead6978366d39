use rand::Rng;
use std::fmt;

/// A pixel-aligned grid position. Both coordinates are multiples of the
/// grid's cell size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Playfield geometry: field size in pixels and the size of one cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self { width, height, cell_size }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Cell at a column/row index.
    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.cell_size, row * self.cell_size)
    }

    /// Column/row index of the cell containing a pixel.
    pub fn column_row(&self, cell: Cell) -> (i32, i32) {
        (
            cell.x.div_euclid(self.cell_size),
            cell.y.div_euclid(self.cell_size),
        )
    }

    pub fn center(&self) -> Cell {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    /// Moves `from` by a delta in cells, wrapping around the field edges.
    pub fn offset(&self, from: Cell, (dx, dy): (i32, i32)) -> Cell {
        Cell::new(
            (from.x + dx * self.cell_size).rem_euclid(self.width),
            (from.y + dy * self.cell_size).rem_euclid(self.height),
        )
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let column = rng.gen_range(0..self.columns());
        let row = rng.gen_range(0..self.rows());
        self.cell_at(column, row)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell_at(col, row)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(640, 480, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_dimensions() {
        let grid = Grid::default();
        assert_eq!(grid.columns(), 32);
        assert_eq!(grid.rows(), 24);
        assert_eq!(grid.cell_count(), 768);
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::default().center(), Cell::new(320, 240));
        assert_eq!(Grid::new(100, 60, 20).center(), Cell::new(40, 20));
    }

    #[test]
    fn test_pixel_cell_conversion() {
        let grid = Grid::default();
        assert_eq!(grid.cell_at(3, 5), Cell::new(60, 100));
        assert_eq!(grid.column_row(Cell::new(60, 100)), (3, 5));
        assert_eq!(grid.column_row(Cell::new(79, 119)), (3, 5));
    }

    #[test]
    fn test_offset_wraps_every_edge() {
        let grid = Grid::default();
        assert_eq!(grid.offset(Cell::new(620, 100), (1, 0)), Cell::new(0, 100));
        assert_eq!(grid.offset(Cell::new(0, 100), (-1, 0)), Cell::new(620, 100));
        assert_eq!(grid.offset(Cell::new(100, 460), (0, 1)), Cell::new(100, 0));
        assert_eq!(grid.offset(Cell::new(100, 0), (0, -1)), Cell::new(100, 460));
    }

    #[test]
    fn test_random_cell_is_aligned_and_in_bounds() {
        let grid = Grid::new(100, 60, 20);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let cell = grid.random_cell(&mut rng);
            assert!(cell.x >= 0 && cell.x < grid.width);
            assert!(cell.y >= 0 && cell.y < grid.height);
            assert_eq!(cell.x % grid.cell_size, 0);
            assert_eq!(cell.y % grid.cell_size, 0);
        }
    }

    #[test]
    fn test_cells_enumerates_whole_grid() {
        let grid = Grid::new(100, 60, 20);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[cells.len() - 1], Cell::new(80, 40));
    }
}
