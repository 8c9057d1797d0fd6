use chess_core::{Color, Rank, ReplayStep};

use crate::extractor_trait::FeatureExtractor;
use crate::record::FeatureRecord;

/// Counts moves whose destination lies in the opponent's half: ranks 5-8 for
/// White, ranks 1-4 for Black. Any piece counts.
#[derive(Default)]
pub struct PieceAdvancementExtractor {
    advances: u32,
}

impl PieceAdvancementExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureExtractor for PieceAdvancementExtractor {
    fn name(&self) -> &'static str {
        "piece_advancement"
    }

    fn start_game(&mut self) {
        self.advances = 0;
    }

    fn process_step(&mut self, step: &ReplayStep) {
        let rank = step.mv.to.rank();
        let advanced = match step.mover() {
            Color::White => rank >= Rank::Fifth,
            Color::Black => rank <= Rank::Fourth,
        };
        if advanced {
            self.advances += 1;
        }
    }

    fn finish_game(&mut self, record: &mut FeatureRecord) {
        record.piece_advancement = self.advances;
    }
}
