//! Per-game feature extraction.
//!
//! Each extractor consumes the replay of one game step by step and
//! contributes one column to the game's [`FeatureRecord`]. The entry point is
//! [`GameAnalyzer`], which drives all extractors from a single replay.

pub mod extractor_trait;
pub mod extractors;
pub mod record;
pub mod unified;

use chess_core::{Move, ReplayError};

pub use extractor_trait::FeatureExtractor;
pub use record::{CastlingType, FeatureRecord, PieceMoveCounts};
pub use unified::{ExtractorSet, GameAnalyzer};

/// Column names with their display labels.
pub const FEATURE_COLUMNS: &[(&str, &str)] = &[
    ("trades", "Trades"),
    ("queen_moves", "Queen moves"),
    ("piece_advancement", "Moves into the opponent's half"),
    ("central_pawns", "Average central pawns"),
    ("game_length", "Game length"),
    ("castling_type", "Castling"),
    ("queen_lifetime", "Queen lifetime"),
    ("piece_moves", "Moves per piece"),
];

/// Display label for a column, falling back to the column name.
pub fn column_label(name: &str) -> &str {
    FEATURE_COLUMNS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, label)| *label)
        .unwrap_or(name)
}

/// Analyze one game with every extractor enabled.
pub fn analyze_game(moves: &[Move]) -> Result<FeatureRecord, ReplayError> {
    GameAnalyzer::new(ExtractorSet::ALL).analyze(moves)
}
