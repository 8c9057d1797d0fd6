//! Move replay: drives a board forward over a move list, one step per ply.

use std::iter::FusedIterator;

use thiserror::Error;

use shakmaty::{Color, Piece};

use crate::board::{Board, BoardError};
use crate::moves::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("replay inconsistency at ply {ply} ({mv}): {source}")]
    Inconsistency {
        ply: usize,
        mv: Move,
        #[source]
        source: BoardError,
    },
}

impl ReplayError {
    /// 0-based index of the move that could not be applied.
    pub fn ply(&self) -> usize {
        match self {
            ReplayError::Inconsistency { ply, .. } => *ply,
        }
    }
}

/// One applied move with the boards on either side of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplayStep {
    pub index: usize,
    pub board_before: Board,
    pub mv: Move,
    pub board_after: Board,
}

impl ReplayStep {
    /// The side that played this move.
    pub fn mover(&self) -> Color {
        self.board_before.turn()
    }

    /// Piece standing on the origin square before the move.
    pub fn moved_piece(&self) -> Option<Piece> {
        self.board_before.piece_at(self.mv.from)
    }

    pub fn is_capture(&self) -> bool {
        self.board_before.is_capture_target(&self.mv)
    }
}

/// Lazy, single-pass sequence of [`ReplayStep`]s.
///
/// Yields `Err` once for the first move that cannot be applied and then ends;
/// steps already yielded stay valid.
pub struct Replay<'a> {
    board: Board,
    moves: std::slice::Iter<'a, Move>,
    ply: usize,
    done: bool,
}

impl<'a> Replay<'a> {
    pub fn new(initial: Board, moves: &'a [Move]) -> Self {
        Self {
            board: initial,
            moves: moves.iter(),
            ply: 0,
            done: false,
        }
    }

    /// Board after the last successfully applied move.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Iterator for Replay<'_> {
    type Item = Result<ReplayStep, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(mv) = self.moves.next() else {
            self.done = true;
            return None;
        };

        let index = self.ply;
        match self.board.apply(mv) {
            Ok(after) => {
                let board_before = std::mem::replace(&mut self.board, after.clone());
                let step = ReplayStep {
                    index,
                    board_before,
                    mv: *mv,
                    board_after: after,
                };
                self.ply += 1;
                Some(Ok(step))
            }
            Err(source) => {
                self.done = true;
                Some(Err(ReplayError::Inconsistency {
                    ply: index,
                    mv: *mv,
                    source,
                }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.moves.len()))
        }
    }
}

impl FusedIterator for Replay<'_> {}

/// Replay `moves` from the standard starting position.
pub fn replay(moves: &[Move]) -> Replay<'_> {
    Replay::new(Board::initial(), moves)
}

/// Replay every move, failing on the first inconsistency.
pub fn replay_all(moves: &[Move]) -> Result<Vec<ReplayStep>, ReplayError> {
    replay(moves).collect()
}
