mod config;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod state;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};
use structopt::StructOpt;

use config::{GameConfig, Options};

pub type TermInt = u16;
pub type GridInt = u16;
pub type Coords = (u16, u16);

fn main() -> Result<()> {
    let opts = Options::from_args();

    // The terminal belongs to the game, so logs go to a file
    let level = if opts.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let log_file = File::create(&opts.log_file)
        .with_context(|| format!("creating log file {}", opts.log_file.display()))?;
    WriteLogger::init(level, Config::default(), log_file).context("initializing logger")?;

    let config = GameConfig::from_options(&opts)?;
    info!("starting with {:?}", config);

    let mut game = game::SnakeGame::new(config)?;
    game.run()
}
