//! Matching and tally engine.
//!
//! Two pure operations over a loaded game collection: summarize games by
//! entry size, and tally how many games reach each prize tier against a
//! drawn-number set. Both are deterministic, never fail, and never mutate
//! their input.

pub mod summary;
pub mod tally;
pub mod tiers;

pub use summary::summarize_game_sizes;
pub use tally::{compare_games, parse_drawn_numbers, tally_matches};
