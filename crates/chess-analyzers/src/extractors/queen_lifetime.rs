use chess_core::{ReplayStep, Role, Square};
use shakmaty::Bitboard;

use crate::extractor_trait::FeatureExtractor;
use crate::record::FeatureRecord;

const QUEEN_HOME_SQUARES: Bitboard =
    Bitboard::from_square(Square::D1).with_const(Bitboard::from_square(Square::D8));

/// How long queens stay on the board, measured as the index of the move
/// after which neither queen home square is still tracked.
///
/// A home square stops being tracked when a move lands on it while a queen
/// stands there. This looks at presence of *a* queen on d1/d8, not survival
/// of the original pieces: a queen that wandered off and never came back
/// keeps its square tracked, and a promoted queen on d1/d8 counts as present.
/// Games where the set never empties report their full length.
#[derive(Default)]
pub struct QueenLifetimeExtractor {
    tracked: Bitboard,
    plies: u32,
    emptied_at: Option<u32>,
}

impl QueenLifetimeExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureExtractor for QueenLifetimeExtractor {
    fn name(&self) -> &'static str {
        "queen_lifetime"
    }

    fn start_game(&mut self) {
        self.tracked = QUEEN_HOME_SQUARES;
        self.plies = 0;
        self.emptied_at = None;
    }

    fn process_step(&mut self, step: &ReplayStep) {
        if self.emptied_at.is_some() {
            return;
        }
        self.plies += 1;

        let queen_on_target = step
            .board_before
            .piece_at(step.mv.to)
            .map(|p| p.role == Role::Queen)
            .unwrap_or(false);
        if queen_on_target {
            self.tracked.discard(step.mv.to);
        }
        if self.tracked.is_empty() {
            self.emptied_at = Some(step.index as u32);
        }
    }

    fn finish_game(&mut self, record: &mut FeatureRecord) {
        record.queen_lifetime = Some(self.emptied_at.unwrap_or(self.plies));
    }
}
