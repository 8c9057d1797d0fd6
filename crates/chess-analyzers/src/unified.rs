//! Game analyzer that feeds every extractor from a single replay pass.

use chess_core::{replay, GameData, Move, ReplayError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extractor_trait::FeatureExtractor;
use crate::extractors;
use crate::record::FeatureRecord;

/// Optional extractors. The six base statistics always run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorSet {
    pub queen_lifetime: bool,
    pub piece_moves: bool,
}

impl ExtractorSet {
    /// What player reports use: the base statistics only.
    pub const PLAYER: ExtractorSet = ExtractorSet {
        queen_lifetime: false,
        piece_moves: false,
    };

    pub const ALL: ExtractorSet = ExtractorSet {
        queen_lifetime: true,
        piece_moves: true,
    };
}

impl Default for ExtractorSet {
    fn default() -> Self {
        Self::PLAYER
    }
}

/// Create the extractor instances for `set`.
fn create_extractors(set: ExtractorSet) -> Vec<Box<dyn FeatureExtractor>> {
    let mut all: Vec<Box<dyn FeatureExtractor>> = vec![
        Box::new(extractors::trades::TradesExtractor::new()),
        Box::new(extractors::queen_moves::QueenMovesExtractor::new()),
        Box::new(extractors::piece_advancement::PieceAdvancementExtractor::new()),
        Box::new(extractors::central_pawns::CentralPawnsExtractor::new()),
        Box::new(extractors::game_length::GameLengthExtractor::new()),
        Box::new(extractors::castling_type::CastlingTypeExtractor::new()),
    ];
    if set.queen_lifetime {
        all.push(Box::new(extractors::queen_lifetime::QueenLifetimeExtractor::new()));
    }
    if set.piece_moves {
        all.push(Box::new(extractors::piece_moves::PieceMovesExtractor::new()));
    }
    all
}

/// Analyzes one game at a time. Reusable across games; each instance owns its
/// extractors, so one analyzer per thread.
pub struct GameAnalyzer {
    extractors: Vec<Box<dyn FeatureExtractor>>,
}

impl Default for GameAnalyzer {
    fn default() -> Self {
        Self::new(ExtractorSet::default())
    }
}

impl GameAnalyzer {
    pub fn new(set: ExtractorSet) -> Self {
        Self {
            extractors: create_extractors(set),
        }
    }

    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Replay `moves` from the standard start and build the game's record.
    ///
    /// Fails with the replay error of the first move that cannot be applied;
    /// no record is produced for that game.
    pub fn analyze(&mut self, moves: &[Move]) -> Result<FeatureRecord, ReplayError> {
        for extractor in self.extractors.iter_mut() {
            extractor.start_game();
        }

        for step in replay(moves) {
            let step = step.inspect_err(|e| {
                debug!(ply = e.ply(), error = %e, "Replay stopped");
            })?;
            for extractor in self.extractors.iter_mut() {
                extractor.process_step(&step);
            }
        }

        let mut record = FeatureRecord::default();
        for extractor in self.extractors.iter_mut() {
            extractor.finish_game(&mut record);
        }
        debug!(plies = record.game_length, trades = record.trades, "Game analyzed");
        Ok(record)
    }

    pub fn analyze_game(&mut self, game: &GameData) -> Result<FeatureRecord, ReplayError> {
        self.analyze(&game.moves)
    }
}
