//! Last-loaded games cache.
//!
//! The loaded collection survives across sessions through an opaque
//! string-keyed store: the payload under [`GAMES_KEY`] is a JSON envelope
//! carrying the schema version and save time. Stores are injected as a
//! plain get/set capability so hosts can bring their own backend.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;
use crate::models::Game;
use crate::SCHEMA_VERSION;

/// Store key for the last-loaded game collection.
pub const GAMES_KEY: &str = "games";

/// Env var overriding the file store directory.
pub const CACHE_DIR_ENV: &str = "LOTERIA_CACHE_DIR";

/// Default relative directory used when `LOTERIA_CACHE_DIR` is not set.
pub const DEFAULT_CACHE_REL_DIR: &str = "data/cache";

/// Minimal get/set capability backing the cache.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// File-backed store: one file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the store directory.
    ///
    /// Resolution order:
    /// 1) `LOTERIA_CACHE_DIR` if set and non-empty
    /// 2) `data/cache` (relative)
    pub fn from_env() -> Self {
        let dir = env::var(CACHE_DIR_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_REL_DIR));

        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;

        // Temp file + rename keeps the payload atomic.
        let path = self.key_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        Ok(())
    }
}

/// In-memory store for tests and hosts that manage persistence themselves.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Cache envelope for the game collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedGames {
    pub schema_version: u8,
    /// Save time, RFC3339.
    pub saved_at: String,
    pub games: Vec<Game>,
}

/// Persist the collection under [`GAMES_KEY`], replacing any previous one.
pub fn persist_games(store: &mut dyn KeyValueStore, games: &[Game]) -> Result<(), CacheError> {
    let envelope = CachedGames {
        schema_version: SCHEMA_VERSION,
        saved_at: chrono::Utc::now().to_rfc3339(),
        games: games.to_vec(),
    };

    let payload = serde_json::to_string(&envelope).map_err(CacheError::Serialization)?;
    store.set(GAMES_KEY, &payload)?;

    log::info!("Cached {} games", games.len());
    Ok(())
}

/// Restore the last-persisted collection, `None` on a cold start.
pub fn restore_games(store: &dyn KeyValueStore) -> Result<Option<Vec<Game>>, CacheError> {
    let Some(payload) = store.get(GAMES_KEY)? else {
        return Ok(None);
    };

    let envelope: CachedGames =
        serde_json::from_str(&payload).map_err(CacheError::Deserialization)?;

    if envelope.schema_version != SCHEMA_VERSION {
        return Err(CacheError::VersionMismatch {
            found: envelope.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    log::info!("Restored {} games from cache", envelope.games.len());
    Ok(Some(envelope.games))
}
