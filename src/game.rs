use log::{debug, info};
use rand::Rng;

use crate::apple::Apple;
use crate::config::Settings;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::render::{Drawable, Palette, Surface};
use crate::snake::Snake;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Close,
}

/// What happened during one tick.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub ate_apple: bool,
    pub apple_moved_off_body: bool,
    pub snake_reset: bool,
}

pub struct Game<R: Rng> {
    grid: Grid,
    palette: Palette,
    snake: Snake,
    apple: Apple,
    status: Status,
    needs_clear: bool,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(settings: &Settings, mut rng: R) -> Self {
        let grid = settings.grid();
        let colors = &settings.colors;
        let snake = Snake::new(&grid, colors.snake(), &mut rng);
        let apple = Apple::spawn(&grid, colors.apple(), &snake.occupied(), &mut rng);
        Self::from_parts(grid, settings.palette(), snake, apple, rng)
    }

    pub fn from_parts(grid: Grid, palette: Palette, snake: Snake, apple: Apple, rng: R) -> Self {
        Self {
            grid,
            palette,
            snake,
            apple,
            status: Status::Running,
            needs_clear: true,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Applies queued input, then moves the world forward by one cell.
    pub fn tick(&mut self, events: impl IntoIterator<Item = InputEvent>) -> TickReport {
        let mut report = TickReport::default();
        if !self.is_running() {
            return report;
        }

        for event in events {
            match event {
                InputEvent::Turn(direction) => self.snake.set_pending_direction(direction),
                InputEvent::Close => {
                    info!("close requested");
                    self.status = Status::Terminated;
                    return report;
                }
            }
        }

        self.snake.advance(&self.grid);

        if self.snake.head() == self.apple.position() {
            self.snake.grow();
            self.apple.relocate(&self.grid, &self.snake.occupied(), &mut self.rng);
            debug!("apple eaten, length {}, next apple at {}", self.snake.length(), self.apple.position());
            report.ate_apple = true;
        } else if self.snake.body_contains(self.apple.position()) {
            self.apple.relocate(&self.grid, &self.snake.occupied(), &mut self.rng);
            debug!("apple was under the body, moved to {}", self.apple.position());
            report.apple_moved_off_body = true;
        }

        if self.snake.bites_itself() {
            info!("snake bit itself at length {}, starting over", self.snake.length());
            self.snake.reset(&self.grid, &mut self.rng);
            self.needs_clear = true;
            report.snake_reset = true;
        }

        report
    }

    /// Paints the current frame. The surface is wiped first when the board was
    /// reset or when `full_redraw` is set. The apple goes last so the tail
    /// erase never paints over it.
    pub fn render(&mut self, surface: &mut dyn Surface, full_redraw: bool) {
        if self.needs_clear || full_redraw {
            surface.clear(self.palette.background);
            self.needs_clear = false;
        }
        self.snake.draw(surface, &self.palette);
        self.apple.draw(surface, &self.palette);
    }
}
