//! Already-disambiguated move instructions.

use std::fmt;
use std::str::FromStr;

use shakmaty::uci::UciMove;
use shakmaty::{CastlingSide, Color, File, Role, Square};
use thiserror::Error;

/// A move instruction. Capture-ness is not stored: it depends on the board
/// the move is applied to.
///
/// Castling moves are encoded king-first: `from` is the king's square and
/// `to` is where the king lands (g- or c-file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
    pub castling: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid coordinate move: {0:?}")]
pub struct ParseMoveError(pub String);

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
            castling: false,
        }
    }

    pub fn promote(from: Square, to: Square, role: Role) -> Self {
        Self {
            promotion: Some(role),
            ..Self::new(from, to)
        }
    }

    /// Castling move for `color` towards `side`, from the standard king square.
    pub fn castle(color: Color, side: CastlingSide) -> Self {
        let rank = color.backrank();
        Self {
            from: Square::from_coords(File::E, rank),
            to: Square::from_coords(side.king_to_file(), rank),
            promotion: None,
            castling: true,
        }
    }

    /// Wing of a castling move, derived from the king's destination file.
    pub fn castling_side(&self) -> Option<CastlingSide> {
        self.castling
            .then(|| CastlingSide::from_king_side(self.to.file() > self.from.file()))
    }

    fn to_uci(self) -> UciMove {
        UciMove::Normal {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

/// Coordinate form: `e2e4`, `e7e8q`. The castling flag is never set here;
/// use [`Move::castle`] for castling.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError(s.to_string());
        match s.parse::<UciMove>().map_err(|_| err())? {
            UciMove::Normal {
                promotion: Some(Role::Pawn | Role::King),
                ..
            } => Err(err()),
            UciMove::Normal {
                from,
                to,
                promotion,
            } => Ok(Self {
                from,
                to,
                promotion,
                castling: false,
            }),
            UciMove::Put { .. } | UciMove::Null => Err(err()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_move() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv, Move::new(Square::E2, Square::E4));

        let promo: Move = "a7a8q".parse().unwrap();
        assert_eq!(promo.promotion, Some(Role::Queen));
        assert_eq!(promo.to_string(), "a7a8q");

        assert!("e2".parse::<Move>().is_err());
        assert!("e2e4x".parse::<Move>().is_err());
        assert!("z2e4".parse::<Move>().is_err());
        assert!("0000".parse::<Move>().is_err());
        assert!("Q@f7".parse::<Move>().is_err());
    }

    #[test]
    fn test_pawn_and_king_are_not_promotion_targets() {
        assert!("e7e8p".parse::<Move>().is_err());
        assert!("e7e8k".parse::<Move>().is_err());
        assert_eq!(
            "e7e8n".parse::<Move>().map(|m| m.promotion),
            Ok(Some(Role::Knight))
        );
    }

    #[test]
    fn test_castle_moves() {
        let short = Move::castle(Color::White, CastlingSide::KingSide);
        assert_eq!((short.from, short.to), (Square::E1, Square::G1));
        assert_eq!(short.castling_side(), Some(CastlingSide::KingSide));

        let long = Move::castle(Color::Black, CastlingSide::QueenSide);
        assert_eq!((long.from, long.to), (Square::E8, Square::C8));
        assert_eq!(long.castling_side(), Some(CastlingSide::QueenSide));

        assert_eq!(Move::new(Square::E1, Square::G1).castling_side(), None);
    }
}
