//! Process-wide slot for the currently loaded game collection.
//!
//! Restored from the cache at startup and replaced wholesale on every
//! successful load; the collection itself is never mutated in place.

use once_cell::sync::Lazy;
use std::sync::RwLock;

use crate::models::Game;

/// Currently loaded game collection, if any.
pub static CURRENT_GAMES: Lazy<RwLock<Option<Vec<Game>>>> = Lazy::new(|| RwLock::new(None));

/// Replace the loaded collection.
pub fn set_current_games(games: Vec<Game>) {
    *CURRENT_GAMES.write().unwrap() = Some(games);
}

/// Snapshot of the loaded collection.
pub fn get_current_games() -> Option<Vec<Game>> {
    CURRENT_GAMES.read().unwrap().clone()
}

/// Drop the loaded collection.
pub fn clear_current_games() {
    *CURRENT_GAMES.write().unwrap() = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the slot is process-global, so splitting these into
    // parallel tests would race.
    #[test]
    fn test_set_get_clear() {
        set_current_games(vec![vec![1, 2, 3]]);
        assert_eq!(get_current_games(), Some(vec![vec![1, 2, 3]]));

        set_current_games(vec![vec![9]]);
        assert_eq!(get_current_games(), Some(vec![vec![9]]));

        clear_current_games();
        assert!(get_current_games().is_none());
    }
}
