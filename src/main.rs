mod config;
mod engine;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod state;
mod term;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::WriteLogger;

use crate::config::GameConfig;

#[derive(Parser)]
#[command(name = "wrap-snake")]
#[command(version, about = "Snake in the terminal, with wrap-around edges")]
struct Cli {
    /// Terminal characters per grid cell
    #[arg(long, default_value = "1")]
    cell_size: u16,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Show head and food coordinates
    #[arg(long)]
    debug_overlay: bool,

    /// Where to write the log, since the terminal is taken by the game
    #[arg(long, default_value = "wrap-snake.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, simplelog::Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = GameConfig { cell_size: cli.cell_size, seed: cli.seed, debug_overlay: cli.debug_overlay };
    config.validate()?;
    info!("Starting with {:?}", config);

    let mut game = game::SnakeGame::new(config)?;
    game.run()
}
