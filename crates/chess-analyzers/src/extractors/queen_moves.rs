use chess_core::{ReplayStep, Role};

use crate::extractor_trait::FeatureExtractor;
use crate::record::FeatureRecord;

/// Counts moves made by a queen, of either color.
#[derive(Default)]
pub struct QueenMovesExtractor {
    queen_moves: u32,
}

impl QueenMovesExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureExtractor for QueenMovesExtractor {
    fn name(&self) -> &'static str {
        "queen_moves"
    }

    fn start_game(&mut self) {
        self.queen_moves = 0;
    }

    fn process_step(&mut self, step: &ReplayStep) {
        if let Some(piece) = step.moved_piece() {
            if piece.role == Role::Queen {
                self.queen_moves += 1;
            }
        }
    }

    fn finish_game(&mut self, record: &mut FeatureRecord) {
        record.queen_moves = self.queen_moves;
    }
}
