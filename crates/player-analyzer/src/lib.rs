//! Player-level aggregation over many games.
//!
//! Loads a player's PGN games, analyzes a bounded batch of them and reduces
//! the per-game feature records to column means and counts.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod selection;

use std::fs;

use chess_core::pgn::split_games;
use tracing::debug;

pub use aggregate::{BatchReport, DroppedGame, FeatureTable, PlayerAggregator, PlayerSummary};
pub use config::BatchConfig;
pub use error::AnalyzerError;

/// Read every PGN file matching `pattern` and split them into single games,
/// in path order.
pub fn load_pgn_files(pattern: &str) -> Result<Vec<String>, AnalyzerError> {
    let mut games = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry.map_err(std::io::Error::from)?;
        let text = fs::read_to_string(&path)?;
        let before = games.len();
        games.extend(split_games(&text));
        debug!(path = %path.display(), games = games.len() - before, "Loaded PGN file");
    }
    Ok(games)
}
