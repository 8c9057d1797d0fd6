use chess_core::ReplayStep;

use crate::extractor_trait::FeatureExtractor;
use crate::record::FeatureRecord;

/// Number of half-moves played.
#[derive(Default)]
pub struct GameLengthExtractor {
    plies: u32,
}

impl GameLengthExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureExtractor for GameLengthExtractor {
    fn name(&self) -> &'static str {
        "game_length"
    }

    fn start_game(&mut self) {
        self.plies = 0;
    }

    fn process_step(&mut self, _step: &ReplayStep) {
        self.plies += 1;
    }

    fn finish_game(&mut self, record: &mut FeatureRecord) {
        record.game_length = self.plies;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::test_support::{moves, run};

    #[test]
    fn test_counts_every_ply() {
        let record = run(
            &mut GameLengthExtractor::new(),
            &moves(&["d2d4", "d7d5", "c2c4"]),
        );
        assert_eq!(record.game_length, 3);
    }

    #[test]
    fn test_empty_game() {
        let record = run(&mut GameLengthExtractor::new(), &[]);
        assert_eq!(record.game_length, 0);
    }
}
