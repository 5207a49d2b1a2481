use std::io::stdout;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

mod autoplay;
mod engine;
mod error;
mod tui;
mod tui48;

use autoplay::Strategy;
use engine::board::Board;
use tui::crossterm::{Crossterm, CrosstermEvents};
use tui48::Tui48;

/// Slide and merge numbered tiles on a 4x4 board until you reach 2048.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    /// Where log records go; the terminal belongs to the game.
    #[arg(long, default_value = "./output.log")]
    log_file: PathBuf,

    /// Seed for tile placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Default, Subcommand)]
enum Command {
    /// Play interactively in the terminal.
    #[default]
    Play,

    /// Let the computer play without a display and print the result.
    Autoplay {
        #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
        strategy: Strategy,

        /// Stop after this many moves even if the game isn't over.
        #[arg(long)]
        max_moves: Option<usize>,
    },
}

fn setup_logging(level: log::LevelFilter, path: &Path) -> error::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(level)
        .chain(fern::log_file(path)?)
        .apply()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose.log_level_filter(), &cli.log_file)?;

    let mut board = match cli.seed {
        Some(seed) => Board::new(StdRng::seed_from_u64(seed)),
        None => Board::new(thread_rng()),
    };

    match cli.command.unwrap_or_default() {
        Command::Play => {
            let w = stdout().lock();
            let renderer = Crossterm::new(Box::new(w))?;
            let event_source = CrosstermEvents::default();
            let board = Tui48::new(board, renderer, event_source).run()?;
            println!(
                "final score {}, best tile {}",
                board.score(),
                board.max_tile()
            );
        }
        Command::Autoplay {
            strategy,
            max_moves,
        } => {
            let summary = autoplay::run(&mut board, strategy, max_moves);
            println!("{}", summary);
        }
    }

    Ok(())
}
