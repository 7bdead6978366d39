//! Grid Snake on macroquad.
//!
//! The game core (`grid`, `direction`, `snake`, `apple`, `game`) does no I/O
//! and draws through the `render::Surface` trait, so it runs headless in
//! tests. `app` wires it to a macroquad window.

pub mod app;
pub mod apple;
pub mod config;
pub mod direction;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
pub mod timing;

pub use apple::Apple;
pub use config::Settings;
pub use direction::Direction;
pub use game::{Game, InputEvent, Status, TickReport};
pub use grid::{Cell, Grid};
pub use snake::Snake;
