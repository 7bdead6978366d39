use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, error};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

use snake_grid::app;
use snake_grid::config::{Overrides, Settings};

#[derive(Parser)]
#[command(name = "snake_grid")]
#[command(version, about = "Classic grid Snake")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<i32>,

    /// Game ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Seed for apple placement and start directions
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            screen_width: self.width,
            screen_height: self.height,
            cell_size: self.cell_size,
            speed: self.speed,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    TermLogger::init(cli.log_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .context("failed to initialize logger")?;

    let settings = Settings::load(cli.config.as_deref(), &cli.overrides())?;

    if cli.print_config {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    let conf = app::window_conf(&settings);
    macroquad::Window::from_config(conf, async move {
        if let Err(err) = app::run(settings).await {
            error!("game loop failed: {err:#}");
        }
    });
    Ok(())
}
