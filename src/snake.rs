use macroquad::color::Color;
use rand::Rng;
use std::collections::{HashSet, VecDeque};

use crate::direction::Direction;
use crate::grid::{Cell, Grid};
use crate::render::{Drawable, Palette, Surface};

pub struct Snake {
    /// Head at the front.
    body: VecDeque<Cell>,
    /// Target body length; the tail is kept while the body is shorter.
    length: usize,
    /// Tail cell dropped by the last advance, still painted on screen.
    last: Option<Cell>,
    direction: Direction,
    next_direction: Option<Direction>,
    color: Color,
}

impl Snake {
    /// A one-cell snake at the centre of the grid heading somewhere random.
    pub fn new<R: Rng + ?Sized>(grid: &Grid, color: Color, rng: &mut R) -> Self {
        let mut snake = Self::from_body([grid.center()], Direction::Right, color);
        snake.reset(grid, rng);
        snake
    }

    /// Builds a snake with an explicit body, head first. Length is the body
    /// length. An empty body falls back to a single cell at the origin.
    pub fn from_body(cells: impl IntoIterator<Item = Cell>, direction: Direction, color: Color) -> Self {
        let mut body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            body.push_back(Cell::new(0, 0));
        }
        Self {
            length: body.len(),
            body,
            last: None,
            direction,
            next_direction: None,
            color,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn last(&self) -> Option<Cell> {
        self.last
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Whether `cell` lies on the body behind the head.
    pub fn body_contains(&self, cell: Cell) -> bool {
        self.body.iter().skip(1).any(|c| *c == cell)
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Queues a turn for the next advance. Reversing into the neck is
    /// silently ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if self.direction.is_opposite(direction) {
            return;
        }
        self.next_direction = Some(direction);
    }

    pub fn advance(&mut self, grid: &Grid) {
        if let Some(next) = self.next_direction.take() {
            self.direction = next;
        }

        let new_head = grid.offset(self.head(), self.direction.delta());
        self.body.push_front(new_head);

        self.last = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn bites_itself(&self) -> bool {
        self.body_contains(self.head())
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.length = 1;
        self.body.clear();
        self.body.push_back(grid.center());
        self.last = None;
        self.next_direction = None;
        self.direction = Direction::random(rng);
    }
}

impl Drawable for Snake {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) {
        if let Some(last) = self.last {
            surface.fill_cell(last, palette.background);
        }
        for cell in &self.body {
            surface.draw_cell(*cell, self.color, palette.border);
        }
    }
}
