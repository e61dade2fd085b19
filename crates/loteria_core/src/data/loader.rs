//! YAML game loader.
//!
//! The input format is a YAML sequence of sequences of integers, one inner
//! sequence per game:
//!
//! ```yaml
//! - [1, 2, 3, 4, 5, 6]
//! - [7, 8, 9, 10, 11, 12]
//! ```

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::models::Game;

/// Parse a YAML document into a game collection.
///
/// The loader guarantees shape only: every item must be a flat sequence of
/// integers, and anything else is a parse error. Range and duplicate
/// checks are deliberately absent; games pass through as written.
pub fn parse_games_yaml(yaml: &str) -> Result<Vec<Game>, LoadError> {
    let games: Vec<Game> = serde_yaml::from_str(yaml)?;
    Ok(games)
}

/// Read and parse a game file.
pub fn load_games_file(path: &Path) -> Result<Vec<Game>, LoadError> {
    let yaml = fs::read_to_string(path)?;
    let games = parse_games_yaml(&yaml)?;
    log::info!("Loaded {} games from {}", games.len(), path.display());
    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flow_style() {
        let yaml = "- [1, 2, 3, 4, 5, 6]\n- [7, 8, 9, 10, 11, 12]\n";
        let games = parse_games_yaml(yaml).unwrap();
        assert_eq!(games, vec![vec![1, 2, 3, 4, 5, 6], vec![7, 8, 9, 10, 11, 12]]);
    }

    #[test]
    fn test_parse_block_style() {
        let yaml = "- - 1\n  - 2\n  - 3\n- - 4\n  - 5\n";
        let games = parse_games_yaml(yaml).unwrap();
        assert_eq!(games, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_games_yaml("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_entry_is_an_error() {
        assert!(parse_games_yaml("- [1, 2]\n- not-a-game\n").is_err());
        assert!(parse_games_yaml("just a string").is_err());
    }

    #[test]
    fn test_load_games_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.yaml");
        fs::write(&path, "- [1, 2, 3]\n").unwrap();

        assert_eq!(load_games_file(&path).unwrap(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_games_file(Path::new("no/such/file.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
