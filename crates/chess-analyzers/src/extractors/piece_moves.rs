use chess_core::ReplayStep;

use crate::extractor_trait::FeatureExtractor;
use crate::record::{FeatureRecord, PieceMoveCounts};

/// Tally of moves per kind of moving piece. Castling counts as a king move.
#[derive(Default)]
pub struct PieceMovesExtractor {
    counts: PieceMoveCounts,
}

impl PieceMovesExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureExtractor for PieceMovesExtractor {
    fn name(&self) -> &'static str {
        "piece_moves"
    }

    fn start_game(&mut self) {
        self.counts = PieceMoveCounts::default();
    }

    fn process_step(&mut self, step: &ReplayStep) {
        if let Some(piece) = step.moved_piece() {
            self.counts.increment(piece.role);
        }
    }

    fn finish_game(&mut self, record: &mut FeatureRecord) {
        record.piece_moves = Some(self.counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::test_support::{moves, run};
    use chess_core::{CastlingSide, Color, Move};

    #[test]
    fn test_counts_by_kind() {
        let mut list = moves(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "d8f6"]);
        list.push(Move::castle(Color::White, CastlingSide::KingSide));
        let record = run(&mut PieceMovesExtractor::new(), &list);
        let counts = record.piece_moves.unwrap();

        assert_eq!(counts.pawns, 2);
        assert_eq!(counts.knights, 2);
        assert_eq!(counts.bishops, 1);
        assert_eq!(counts.queens, 1);
        assert_eq!(counts.kings, 1);
        assert_eq!(counts.rooks, 0);
        assert_eq!(counts.total(), 7);
    }
}
