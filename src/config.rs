use std::{path::PathBuf, time::Duration};

use anyhow::{bail, Result};
use structopt::StructOpt;

use crate::GridInt;

pub const DEFAULT_WIDTH: GridInt = 30;
pub const DEFAULT_HEIGHT: GridInt = 35;
pub const DEFAULT_FRAMES_PER_STEP: u64 = 5;
pub const DEFAULT_FRAME_MS: u64 = 16;
pub const DEFAULT_TILE_WIDTH: u16 = 2;

#[derive(StructOpt, Debug)]
#[structopt(name = "snake", about = "Snake in the terminal. Arrow keys or WASD to steer, q or CTRL+C to quit.")]
pub struct Options {
    /// Number of grid columns
    #[structopt(long, default_value = "30")]
    pub width: GridInt,

    /// Number of grid rows
    #[structopt(long, default_value = "35")]
    pub height: GridInt,

    /// Frames between two snake moves
    #[structopt(long, default_value = "5")]
    pub frames_per_step: u64,

    /// Duration of one frame in milliseconds
    #[structopt(long, default_value = "16")]
    pub frame_ms: u64,

    /// Terminal columns used by one tile
    #[structopt(long, default_value = "2")]
    pub tile_width: u16,

    /// Seed for fruit placement
    #[structopt(long)]
    pub seed: Option<u64>,

    /// File the log is written to
    #[structopt(long, default_value = "snake.log", parse(from_os_str))]
    pub log_file: PathBuf,

    /// Log debug events as well
    #[structopt(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width: GridInt,
    pub height: GridInt,
    pub frames_per_step: u64,
    pub frame_interval: Duration,
    pub tile_width: u16,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frames_per_step: DEFAULT_FRAMES_PER_STEP,
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
            tile_width: DEFAULT_TILE_WIDTH,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_options(opts: &Options) -> Result<Self> {
        let config = GameConfig {
            width: opts.width,
            height: opts.height,
            frames_per_step: opts.frames_per_step,
            frame_interval: Duration::from_millis(opts.frame_ms),
            tile_width: opts.tile_width,
            seed: opts.seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // the start cell plus one fruit
        if (self.width as usize) * (self.height as usize) < 2 {
            bail!("grid {}x{} is too small to play on", self.width, self.height);
        }
        if self.frames_per_step == 0 {
            bail!("frames per step must be at least 1");
        }
        if self.tile_width == 0 {
            bail!("tile width must be at least 1");
        }
        if self.surface_size().is_none() {
            bail!("grid {}x{} does not fit in a terminal", self.width, self.height);
        }
        Ok(())
    }

    /// Terminal cells needed to show the whole grid.
    pub fn surface_size(&self) -> Option<(u16, u16)> {
        Some((self.width.checked_mul(self.tile_width)?, self.height))
    }

    /// Where a new run starts: bottom row, middle column.
    pub fn start_position(&self) -> (GridInt, GridInt) {
        (self.width / 2, self.height - 1)
    }
}
