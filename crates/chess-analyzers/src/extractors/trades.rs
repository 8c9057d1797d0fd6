use chess_core::ReplayStep;

use crate::extractor_trait::FeatureExtractor;
use crate::record::FeatureRecord;

/// Counts moves that land on an opponent piece.
#[derive(Default)]
pub struct TradesExtractor {
    trades: u32,
}

impl TradesExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureExtractor for TradesExtractor {
    fn name(&self) -> &'static str {
        "trades"
    }

    fn start_game(&mut self) {
        self.trades = 0;
    }

    fn process_step(&mut self, step: &ReplayStep) {
        if step.is_capture() {
            self.trades += 1;
        }
    }

    fn finish_game(&mut self, record: &mut FeatureRecord) {
        record.trades = self.trades;
    }
}
