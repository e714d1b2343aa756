//! Wordle Game - CLI
//!
//! Plays one game of Wordle in the terminal against a random answer.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{PlayConfig, play_game},
    game::GameSession,
    output::{AnsiRenderer, BoardRenderer, PlainRenderer, Screen},
    wordlists::WordStore,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    /// File of allowed guesses, one word per line (default: bundled list)
    #[arg(long, requires = "answers")]
    allowed: Option<PathBuf>,

    /// File of possible answers, one word per line (default: bundled list)
    #[arg(long, requires = "allowed")]
    answers: Option<PathBuf>,

    /// Seed for answer selection, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Keep previous turns on screen instead of clearing the terminal
    #[arg(long)]
    no_clear: bool,

    /// Render feedback without colours
    #[arg(long)]
    no_color: bool,

    /// Print an emoji share grid when the game ends
    #[arg(long)]
    share: bool,
}

/// Load word lists from the given files, or the bundled lists
fn load_store(cli: &Cli) -> Result<WordStore> {
    match (&cli.allowed, &cli.answers) {
        (Some(allowed), Some(answers)) => {
            WordStore::load(allowed, answers).context("failed to load word lists")
        }
        _ => Ok(WordStore::embedded()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = load_store(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let mut session = GameSession::new(&store, &mut rng);

    let renderer: &dyn BoardRenderer = if cli.no_color {
        &PlainRenderer
    } else {
        &AnsiRenderer
    };
    let config = PlayConfig {
        renderer,
        screen: Screen::new(!cli.no_clear),
        show_share: cli.share,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_game(&mut session, &config, stdin.lock(), &mut stdout)?;

    Ok(())
}
