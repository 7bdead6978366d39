use anyhow::{Context, Result, bail};
use macroquad::color::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::grid::Grid;
use crate::render::Palette;

pub const DEFAULT_SPEED: u32 = 20;
/// Largest accepted window side in pixels.
pub const MAX_SCREEN_SIDE: i32 = 16_384;

/// RGB colours of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub background: [u8; 3],
    pub border: [u8; 3],
    pub apple: [u8; 3],
    pub snake: [u8; 3],
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            border: [93, 216, 228],
            apple: [255, 0, 0],
            snake: [0, 255, 0],
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba(r, g, b, 255)
}

impl Colors {
    pub fn apple(&self) -> Color {
        rgb(self.apple)
    }

    pub fn snake(&self) -> Color {
        rgb(self.snake)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: i32,
    pub screen_height: i32,
    pub cell_size: i32,
    /// Game ticks per second.
    pub speed: u32,
    pub seed: Option<u64>,
    pub window_title: String,
    pub colors: Colors,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            speed: DEFAULT_SPEED,
            seed: None,
            window_title: "Snake".to_owned(),
            colors: Colors::default(),
        }
    }
}

/// Values given on the command line; each one that is set wins over the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub screen_width: Option<i32>,
    pub screen_height: Option<i32>,
    pub cell_size: Option<i32>,
    pub speed: Option<u32>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid settings JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Defaults, then the optional file, then overrides; validated.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply(overrides);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(width) = overrides.screen_width {
            self.screen_width = width;
        }
        if let Some(height) = overrides.screen_height {
            self.screen_height = height;
        }
        if let Some(cell_size) = overrides.cell_size {
            self.cell_size = cell_size;
        }
        if let Some(speed) = overrides.speed {
            self.speed = speed;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            bail!("cell size must be positive, got {}", self.cell_size);
        }
        if self.screen_width <= 0 || self.screen_height <= 0 {
            bail!("screen size must be positive, got {}x{}", self.screen_width, self.screen_height);
        }
        if self.screen_width > MAX_SCREEN_SIDE || self.screen_height > MAX_SCREEN_SIDE {
            bail!(
                "screen size {}x{} exceeds the {MAX_SCREEN_SIDE}px limit",
                self.screen_width,
                self.screen_height
            );
        }
        if self.screen_width % self.cell_size != 0 || self.screen_height % self.cell_size != 0 {
            bail!(
                "screen size {}x{} is not a multiple of the cell size {}",
                self.screen_width,
                self.screen_height,
                self.cell_size
            );
        }
        if self.speed == 0 {
            bail!("speed must be at least one tick per second");
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize settings")
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.screen_width, self.screen_height, self.cell_size)
    }

    pub fn palette(&self) -> Palette {
        Palette {
            background: rgb(self.colors.background),
            border: rgb(self.colors.border),
        }
    }

    pub fn tick_interval(&self) -> f64 {
        1.0 / f64::from(self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.grid(), Grid::new(640, 480, 20));
        assert_eq!(settings.speed, 20);
        assert_eq!(settings.palette(), Palette::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "speed": 15, "colors": { "snake": [0, 128, 0] } }"#).unwrap();
        assert_eq!(settings.speed, 15);
        assert_eq!(settings.screen_width, 640);
        assert_eq!(settings.colors.snake, [0, 128, 0]);
        assert_eq!(settings.colors.apple, [255, 0, 0]);
    }

    #[test]
    fn test_load_file_with_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "screen_width": 400, "screen_height": 300, "cell_size": 10 }}"#).unwrap();

        let overrides = Overrides {
            speed: Some(12),
            seed: Some(99),
            ..Default::default()
        };
        let settings = Settings::load(Some(file.path()), &overrides).unwrap();

        assert_eq!(settings.grid(), Grid::new(400, 300, 10));
        assert_eq!(settings.speed, 12);
        assert_eq!(settings.seed, Some(99));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = Settings::load(Some(&path), &Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_validation() {
        let misaligned = Settings {
            screen_width: 650,
            ..Default::default()
        };
        assert!(misaligned.validate().is_err());

        let stopped = Settings {
            speed: 0,
            ..Default::default()
        };
        assert!(stopped.validate().is_err());

        let no_cells = Settings {
            cell_size: 0,
            ..Default::default()
        };
        assert!(no_cells.validate().is_err());
    }

    #[test]
    fn test_huge_screen_is_rejected() {
        let huge = Settings {
            screen_width: 1_000_000,
            screen_height: 1_000_000,
            cell_size: 1,
            ..Default::default()
        };
        let err = huge.validate().unwrap_err();
        assert!(err.to_string().contains("limit"));

        let largest = Settings {
            screen_width: MAX_SCREEN_SIDE,
            screen_height: MAX_SCREEN_SIDE,
            cell_size: 1,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
        assert_eq!(largest.grid().cell_count(), (MAX_SCREEN_SIDE as usize).pow(2));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            ..Default::default()
        };
        let text = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&text).unwrap(), settings);
    }

    #[test]
    fn test_tick_interval() {
        assert!((Settings::default().tick_interval() - 0.05).abs() < 1e-9);
    }
}
