//! Game data plumbing: YAML loader and last-loaded cache.

pub mod cache;
pub mod loader;

pub use cache::{
    persist_games, restore_games, CachedGames, FileStore, KeyValueStore, MemoryStore,
    CACHE_DIR_ENV, DEFAULT_CACHE_REL_DIR, GAMES_KEY,
};
pub use loader::{load_games_file, parse_games_yaml};
