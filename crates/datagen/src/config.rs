//! Data generation settings, read from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::DatagenError;

/// Configuration for one generation run.
///
/// ```toml
/// output = "data/samples.jsonl"
/// games_file = "data/games.txt"
/// random_games = 200
/// max_plies = 300
/// seed = 7
/// threads = 8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatagenConfig {
    /// Where the JSONL samples are written
    pub output: PathBuf,
    /// Recorded games, one per line (tokens separated by whitespace)
    pub games_file: Option<PathBuf>,
    /// Number of random self-play games to add
    pub random_games: u32,
    /// Self-play games stop here if still undecided
    pub max_plies: u32,
    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,
    /// Worker threads (None = one per core)
    pub threads: Option<usize>,
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("samples.jsonl"),
            games_file: None,
            random_games: 0,
            max_plies: 300,
            seed: 0,
            threads: None,
        }
    }
}

impl DatagenConfig {
    pub fn load(path: &Path) -> Result<Self, DatagenError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DatagenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, DatagenError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Parse a games file: one game per line, `#` starts a comment, blank lines
/// are skipped.
pub fn parse_games(contents: &str) -> Vec<Vec<String>> {
    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

pub fn load_games(path: &Path) -> Result<Vec<Vec<String>>, DatagenError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DatagenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_games(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = DatagenConfig::from_toml("random_games = 12\nseed = 5\n").unwrap();
        assert_eq!(config.random_games, 12);
        assert_eq!(config.seed, 5);
        assert_eq!(config.max_plies, 300);
        assert_eq!(config.output, PathBuf::from("samples.jsonl"));
        assert!(config.games_file.is_none());
    }

    #[test]
    fn test_bad_config_is_an_error() {
        assert!(matches!(
            DatagenConfig::from_toml("random_games = \"many\""),
            Err(DatagenError::Config(_))
        ));
    }

    #[test]
    fn test_parse_games_skips_comments() {
        let games = parse_games("# header\ne2e4 e7e5\n\n  d2d4 d7d5 # queen's pawn\n");
        assert_eq!(games.len(), 2);
        assert_eq!(games[0], vec!["e2e4", "e7e5"]);
        assert_eq!(games[1], vec!["d2d4", "d7d5"]);
    }
}
