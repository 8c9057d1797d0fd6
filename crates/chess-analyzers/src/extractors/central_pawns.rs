use chess_core::ReplayStep;
use shakmaty::Bitboard;

use crate::extractor_trait::FeatureExtractor;
use crate::record::FeatureRecord;

/// Average number of pawns (either color) on d4, d5, e4 and e5, sampled after
/// every move and floored. Zero for an empty game.
#[derive(Default)]
pub struct CentralPawnsExtractor {
    total: u32,
    plies: u32,
}

impl CentralPawnsExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureExtractor for CentralPawnsExtractor {
    fn name(&self) -> &'static str {
        "central_pawns"
    }

    fn start_game(&mut self) {
        self.total = 0;
        self.plies = 0;
    }

    fn process_step(&mut self, step: &ReplayStep) {
        let pawns = (step.board_after.placement().pawns() & Bitboard::CENTER).count() as u32;
        self.total += pawns;
        self.plies += 1;
    }

    fn finish_game(&mut self, record: &mut FeatureRecord) {
        record.central_pawns = self.total / self.plies.max(1);
    }
}
