//! Loteria CLI
//!
//! Loads game files, summarizes them by entry size and compares them
//! against the drawn numbers. The last loaded collection is cached, so
//! later runs can pass `--cached` instead of a file.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use loteria_core::data::{persist_games, restore_games, FileStore};
use loteria_core::engine::{compare_games, summarize_game_sizes, tiers};
use loteria_core::models::{MatchTally, SizeSummary};
use loteria_core::{get_current_games, load_games_file, set_current_games};

#[derive(Parser)]
#[command(name = "loteria")]
#[command(about = "Check lottery games against drawn numbers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize loaded games by entry size
    Summary {
        /// Games YAML file (a list of lists of numbers)
        #[arg(long)]
        games: Option<PathBuf>,

        /// Use the last cached collection instead of a file
        #[arg(long, default_value = "false")]
        cached: bool,
    },

    /// Compare loaded games against drawn numbers
    Compare {
        /// Drawn numbers, e.g. "1, 2, 3, 4, 5, 6"
        #[arg(long)]
        drawn: String,

        /// Games YAML file (a list of lists of numbers)
        #[arg(long)]
        games: Option<PathBuf>,

        /// Use the last cached collection instead of a file
        #[arg(long, default_value = "false")]
        cached: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { games, cached } => {
            load_into_state(games, cached)?;
            let games = get_current_games().context("No games loaded")?;

            println!("🎲 Games loaded: {}", games.len());
            let summary = summarize_game_sizes(&games);
            for line in format_summary(&summary) {
                println!("{line}");
            }
        }
        Commands::Compare { drawn, games, cached } => {
            load_into_state(games, cached)?;
            let games = get_current_games().context("No games loaded")?;

            println!("🎯 Result for \"{}\"", drawn.trim());
            let tally = compare_games(&games, &drawn);
            for line in format_tally(&tally) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Load games from a file (persisting them to the cache) or restore the
/// last cached collection, then publish them as the current collection.
fn load_into_state(path: Option<PathBuf>, cached: bool) -> Result<()> {
    let games = match (path, cached) {
        (Some(path), _) => {
            let games = load_games_file(&path)
                .with_context(|| format!("Failed to load games from {}", path.display()))?;

            let mut store = FileStore::from_env();
            persist_games(&mut store, &games).context("Failed to cache games")?;
            games
        }
        (None, true) => {
            let store = FileStore::from_env();
            restore_games(&store)
                .context("Failed to read the games cache")?
                .context("No cached games found; load a file first with --games")?
        }
        (None, false) => bail!("Pass --games <file> or --cached"),
    };

    set_current_games(games);
    Ok(())
}

/// Size table rows, largest entries first, lengths zero-padded.
fn format_summary(summary: &SizeSummary) -> Vec<String> {
    let mut rows: Vec<(usize, usize)> = summary.iter().map(|(&size, &count)| (size, count)).collect();
    rows.sort_by(|a, b| b.0.cmp(&a.0));

    rows.into_iter()
        .map(|(size, count)| format!("   {size:02} numbers: {count} games"))
        .collect()
}

/// Tally rows with prize tier labels, or the no-winners line.
fn format_tally(tally: &MatchTally) -> Vec<String> {
    if tally.is_empty() {
        return vec!["   No winners :(".to_string()];
    }

    tally
        .iter()
        .map(|&(tier, count)| match tiers::label(tier) {
            Some(label) => format!("   {label} ({tier} matches): {count} games"),
            None => format!("   {tier} matches: {count} games"),
        })
        .collect()
}
