//! Board state: piece placement, side to move and castling rights.

use shakmaty::{CastlingSide, Color, File, Piece, Role, Square};
use thiserror::Error;

use crate::moves::Move;

/// A move that cannot be attributed to the position it is played in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),

    #[error("piece on {square} is {found} but {expected} is to move")]
    WrongSide {
        square: Square,
        expected: Color,
        found: Color,
    },

    #[error("move onto {0} would capture a piece of the mover's own color")]
    OwnPieceCaptured(Square),

    #[error("move onto {0} would capture a king")]
    KingCaptured(Square),

    #[error("castling from {0}, which is not the king's home square")]
    CastlingKingMisplaced(Square),

    #[error("castling needs a rook on {0}")]
    CastlingRookMissing(Square),

    #[error("{color} has lost the right to castle {side:?}")]
    CastlingUnavailable { color: Color, side: CastlingSide },
}

/// File a castling rook starts from in standard chess.
fn rook_home_file(side: CastlingSide) -> File {
    match side {
        CastlingSide::KingSide => File::H,
        CastlingSide::QueenSide => File::A,
    }
}

/// Per-color castling availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    pub fn has(&self, color: Color, side: CastlingSide) -> bool {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => self.white_king_side,
            (Color::White, CastlingSide::QueenSide) => self.white_queen_side,
            (Color::Black, CastlingSide::KingSide) => self.black_king_side,
            (Color::Black, CastlingSide::QueenSide) => self.black_queen_side,
        }
    }

    fn discard(&mut self, color: Color, side: CastlingSide) {
        let flag = match (color, side) {
            (Color::White, CastlingSide::KingSide) => &mut self.white_king_side,
            (Color::White, CastlingSide::QueenSide) => &mut self.white_queen_side,
            (Color::Black, CastlingSide::KingSide) => &mut self.black_king_side,
            (Color::Black, CastlingSide::QueenSide) => &mut self.black_queen_side,
        };
        *flag = false;
    }

    fn discard_color(&mut self, color: Color) {
        self.discard(color, CastlingSide::KingSide);
        self.discard(color, CastlingSide::QueenSide);
    }

    /// Drop the right tied to a rook corner once anything leaves or lands on it.
    fn touch(&mut self, square: Square) {
        for color in Color::ALL {
            if square.rank() != color.backrank() {
                continue;
            }
            for side in [CastlingSide::KingSide, CastlingSide::QueenSide] {
                if square.file() == rook_home_file(side) {
                    self.discard(color, side);
                }
            }
        }
    }

    /// KQkq-style rendering, `-` when empty.
    pub fn to_fen(&self) -> String {
        let mut s = String::new();
        if self.white_king_side {
            s.push('K');
        }
        if self.white_queen_side {
            s.push('Q');
        }
        if self.black_king_side {
            s.push('k');
        }
        if self.black_queen_side {
            s.push('q');
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

/// Piece placement plus side to move and castling rights.
///
/// [`Board::apply`] returns the successor and leaves the receiver untouched.
/// Legality beyond the structural checks in [`BoardError`] is not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    placement: shakmaty::Board,
    turn: Color,
    castling: CastlingRights,
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// Standard starting position, White to move, all castling rights.
    pub fn initial() -> Self {
        Self {
            placement: shakmaty::Board::new(),
            turn: Color::White,
            castling: CastlingRights::ALL,
        }
    }

    /// Empty board, for building test positions with [`Board::with_piece`].
    pub fn empty(turn: Color) -> Self {
        Self {
            placement: shakmaty::Board::empty(),
            turn,
            castling: CastlingRights::NONE,
        }
    }

    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.placement.set_piece_at(square, piece);
        self
    }

    pub fn with_castling(mut self, castling: CastlingRights) -> Self {
        self.castling = castling;
        self
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.placement.piece_at(square)
    }

    /// Underlying placement, for bitboard queries.
    pub fn placement(&self) -> &shakmaty::Board {
        &self.placement
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.placement.king_of(color)
    }

    /// True when `mv.to` holds a piece of the side not to move. Evaluated on
    /// the board before the move; en passant is not detected.
    pub fn is_capture_target(&self, mv: &Move) -> bool {
        self.placement.color_at(mv.to) == Some(!self.turn)
    }

    /// Play `mv` and return the resulting board. The side to move always flips.
    pub fn apply(&self, mv: &Move) -> Result<Board, BoardError> {
        let piece = self.piece_at(mv.from).ok_or(BoardError::EmptyOrigin(mv.from))?;
        if piece.color != self.turn {
            return Err(BoardError::WrongSide {
                square: mv.from,
                expected: self.turn,
                found: piece.color,
            });
        }

        let mut next = self.clone();
        match mv.castling_side() {
            Some(side) => next.castle(mv, piece, side)?,
            None => next.relocate(mv, piece)?,
        }
        next.turn = !self.turn;
        Ok(next)
    }

    fn relocate(&mut self, mv: &Move, piece: Piece) -> Result<(), BoardError> {
        if let Some(target) = self.piece_at(mv.to) {
            if target.color == piece.color {
                return Err(BoardError::OwnPieceCaptured(mv.to));
            }
            if target.role == Role::King {
                return Err(BoardError::KingCaptured(mv.to));
            }
        } else if piece.role == Role::Pawn && mv.from.file() != mv.to.file() {
            // Diagonal pawn step onto an empty square: en passant.
            let passed = Square::from_coords(mv.to.file(), mv.from.rank());
            if self.piece_at(passed) == Some((!piece.color).pawn()) {
                self.placement.discard_piece_at(passed);
            }
        }

        if piece.role == Role::King {
            self.castling.discard_color(piece.color);
        }
        self.castling.touch(mv.from);
        self.castling.touch(mv.to);

        let arriving = match mv.promotion {
            Some(role) => role.of(piece.color),
            None => piece,
        };
        self.placement.discard_piece_at(mv.from);
        self.placement.set_piece_at(mv.to, arriving);
        Ok(())
    }

    fn castle(&mut self, mv: &Move, king: Piece, side: CastlingSide) -> Result<(), BoardError> {
        let color = king.color;
        let rank = color.backrank();
        if king.role != Role::King || mv.from != Square::from_coords(File::E, rank) {
            return Err(BoardError::CastlingKingMisplaced(mv.from));
        }
        if !self.castling.has(color, side) {
            return Err(BoardError::CastlingUnavailable { color, side });
        }

        let rook_from = Square::from_coords(rook_home_file(side), rank);
        let rook = color.rook();
        if self.piece_at(rook_from) != Some(rook) {
            return Err(BoardError::CastlingRookMissing(rook_from));
        }

        self.placement.discard_piece_at(mv.from);
        self.placement.discard_piece_at(rook_from);
        self.placement
            .set_piece_at(Square::from_coords(side.king_to_file(), rank), king);
        self.placement
            .set_piece_at(Square::from_coords(side.rook_to_file(), rank), rook);
        self.castling.discard_color(color);
        Ok(())
    }

    /// Piece-placement field of FEN.
    pub fn board_fen(&self) -> String {
        self.placement.board_fen().to_string()
    }
}
