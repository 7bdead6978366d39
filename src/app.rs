use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use anyhow::Result;
use log::info;
use macroquad::input::prevent_quit;
use macroquad::prelude::*;

use crate::config::Settings;
use crate::game::Game;
use crate::input::InputQueue;
use crate::render::MacroquadSurface;
use crate::timing::TickLimiter;

pub fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.window_title.clone(),
        window_width: settings.screen_width,
        window_height: settings.screen_height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Everything the frame loop owns between frames.
pub struct App {
    game: Game<StdRng>,
    limiter: TickLimiter,
    input: InputQueue,
    surface: MacroquadSurface,
}

impl App {
    /// Must run inside the macroquad window. Settings are checked before the
    /// window is touched.
    pub fn init(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        // Closing the window becomes a close request the game loop handles.
        prevent_quit();

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let game = Game::new(settings, rng);
        let grid = *game.grid();
        info!(
            "starting {}x{} board ({}px cells) at {} ticks/s",
            grid.columns(),
            grid.rows(),
            grid.cell_size,
            settings.speed
        );

        Ok(Self {
            game,
            limiter: TickLimiter::new(settings.tick_interval()),
            input: InputQueue::new(),
            surface: MacroquadSurface::new(&grid),
        })
    }

    /// Runs one display frame. Returns false once the game has terminated.
    pub fn frame(&mut self) -> bool {
        self.input.poll();

        if self.input.close_requested() || self.limiter.ready(get_time()) {
            self.game.tick(self.input.drain());
        }
        if !self.game.is_running() {
            return false;
        }

        // macroquad hands out a fresh back buffer each frame.
        self.game.render(&mut self.surface, true);
        true
    }

    pub fn shutdown(self) {
        info!("shutting down at length {}", self.game.snake().length());
    }
}

pub async fn run(settings: Settings) -> Result<()> {
    let mut app = App::init(&settings)?;
    while app.frame() {
        next_frame().await;
    }
    app.shutdown();
    Ok(())
}
