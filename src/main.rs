//! Scripted game runner (default binary).
//!
//! Plays well-known roll sequences through the public game API and prints
//! the resulting scoresheet, or the full snapshot as JSON.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tenpin::core::Game;
use tenpin::types::FRAME_COUNT;

#[derive(Parser, Debug)]
#[command(name = "tenpin")]
#[command(about = "Play scripted ten-pin bowling games and print their scores")]
struct Args {
    /// Which scripted game to play
    #[arg(long, value_enum, default_value_t = Script::All)]
    game: Script,

    /// Print the game snapshot as JSON instead of a scoresheet
    #[arg(long)]
    json: bool,

    /// Log every roll (overridden by TENPIN_LOG / RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Script {
    Gutter,
    Ones,
    Spare,
    Strike,
    Perfect,
    TenthSpare,
    TenthStrike,
    Dutch,
    All,
}

impl Script {
    const GAMES: [Script; 8] = [
        Script::Gutter,
        Script::Ones,
        Script::Spare,
        Script::Strike,
        Script::Perfect,
        Script::TenthSpare,
        Script::TenthStrike,
        Script::Dutch,
    ];

    fn name(self) -> &'static str {
        match self {
            Script::Gutter => "gutter",
            Script::Ones => "ones",
            Script::Spare => "spare",
            Script::Strike => "strike",
            Script::Perfect => "perfect",
            Script::TenthSpare => "tenth-spare",
            Script::TenthStrike => "tenth-strike",
            Script::Dutch => "dutch",
            Script::All => "all",
        }
    }

    fn rolls(self) -> Vec<i32> {
        let zeros = |n: usize| std::iter::repeat(0).take(n);
        match self {
            Script::Gutter => vec![0; 20],
            Script::Ones => vec![1; 20],
            Script::Spare => [5, 5, 3].into_iter().chain(zeros(17)).collect(),
            Script::Strike => [10, 3, 4].into_iter().chain(zeros(16)).collect(),
            Script::Perfect => vec![10; 12],
            Script::TenthSpare => zeros(18).chain([5, 5, 7]).collect(),
            Script::TenthStrike => zeros(18).chain([10, 7, 2]).collect(),
            Script::Dutch => std::iter::repeat([10, 5, 5])
                .take(5)
                .flatten()
                .chain([10])
                .collect(),
            Script::All => Vec::new(),
        }
    }

    fn selected(self) -> Vec<Script> {
        match self {
            Script::All => Self::GAMES.to_vec(),
            one => vec![one],
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    for script in args.game.selected() {
        let game = play(script)?;
        if args.json {
            let json = serde_json::to_string_pretty(&game.snapshot())
                .context("failed to serialise game snapshot")?;
            println!("{json}");
        } else {
            println!("{} ({})", script.name(), describe_score(&game));
            println!("{}", render_scoresheet(&game));
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = std::env::var("TENPIN_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn play(script: Script) -> Result<Game> {
    let mut game = Game::new();
    for (i, pins) in script.rolls().into_iter().enumerate() {
        game.roll(pins)
            .with_context(|| format!("roll {} of scripted game '{}'", i + 1, script.name()))?;
    }
    info!(game = script.name(), rolls = game.roll_count(), "scripted game played");
    Ok(game)
}

fn describe_score(game: &Game) -> String {
    match game.score() {
        Ok(total) => format!("score {total}"),
        Err(err) => format!("unscored: {err}"),
    }
}

/// Two-row scoresheet: marks on top, running totals underneath.
fn render_scoresheet(game: &Game) -> String {
    let mut marks_row = String::from("|");
    let mut totals_row = String::from("|");

    for frame in game.frames() {
        let width = if frame.number as usize == FRAME_COUNT { 5 } else { 3 };
        let marks: String = frame.marks().iter().map(|m| m.as_char()).collect();
        let total = frame
            .cumulative
            .map(|t| t.to_string())
            .unwrap_or_default();

        let _ = write!(marks_row, "{marks:^width$}|");
        let _ = write!(totals_row, "{total:^width$}|");
    }

    format!("{marks_row}\n{totals_row}")
}
