//! # loteria_core - Lottery Entry Matching and Tally Engine
//!
//! This library summarizes a loaded set of lottery games by entry size and
//! tallies how many games reach each prize tier (Quadra/Quina/Sena)
//! against an officially drawn set of numbers.
//!
//! ## Features
//! - Pure, deterministic summary and tally operations
//! - Tolerant drawn-number parsing (bad tokens never abort a comparison)
//! - YAML game loading and an injectable last-loaded cache
//! - JSON API for easy integration with host UIs

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;

// Re-export main API functions
pub use api::{compare_result_json, size_summary_json};

// Re-export the core engine
pub use engine::{compare_games, parse_drawn_numbers, summarize_game_sizes, tally_matches};

// Re-export data plumbing
pub use data::{
    load_games_file, parse_games_yaml, persist_games, restore_games, FileStore, KeyValueStore,
    MemoryStore, GAMES_KEY,
};
pub use error::{CacheError, LoadError};

// Re-export state management
pub use state::{clear_current_games, get_current_games, set_current_games, CURRENT_GAMES};

pub use models::{DrawnNumbers, Game, MatchTally, SizeSummary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
