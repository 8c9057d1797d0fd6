use chess_core::{Color, ReplayStep, Square};

use crate::extractor_trait::FeatureExtractor;
use crate::record::{CastlingType, FeatureRecord};

/// Which way White castled. Black's castling is replayed but not classified.
#[derive(Default)]
pub struct CastlingTypeExtractor {
    king_side: bool,
    queen_side: bool,
}

impl CastlingTypeExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureExtractor for CastlingTypeExtractor {
    fn name(&self) -> &'static str {
        "castling_type"
    }

    fn start_game(&mut self) {
        self.king_side = false;
        self.queen_side = false;
    }

    fn process_step(&mut self, step: &ReplayStep) {
        if !step.mv.castling || step.mover() != Color::White {
            return;
        }
        match step.mv.to {
            Square::G1 => self.king_side = true,
            Square::C1 => self.queen_side = true,
            _ => {}
        }
    }

    fn finish_game(&mut self, record: &mut FeatureRecord) {
        record.castling_type = CastlingType::from_flags(self.king_side, self.queen_side);
    }
}
