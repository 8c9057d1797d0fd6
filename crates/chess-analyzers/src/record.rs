//! Per-game feature record.

use std::fmt;

use chess_core::Role;
use serde::{Deserialize, Serialize};

/// Which castling moves White made during the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastlingType {
    #[default]
    None,
    #[serde(rename = "King-side")]
    KingSide,
    #[serde(rename = "Queen-side")]
    QueenSide,
    Both,
}

impl CastlingType {
    pub fn from_flags(king_side: bool, queen_side: bool) -> Self {
        match (king_side, queen_side) {
            (true, true) => CastlingType::Both,
            (true, false) => CastlingType::KingSide,
            (false, true) => CastlingType::QueenSide,
            (false, false) => CastlingType::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CastlingType::None => "None",
            CastlingType::KingSide => "King-side",
            CastlingType::QueenSide => "Queen-side",
            CastlingType::Both => "Both",
        }
    }
}

impl fmt::Display for CastlingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moves made per piece role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PieceMoveCounts {
    pub pawns: u32,
    pub knights: u32,
    pub bishops: u32,
    pub rooks: u32,
    pub queens: u32,
    pub kings: u32,
}

impl PieceMoveCounts {
    fn slot(&mut self, role: Role) -> &mut u32 {
        match role {
            Role::Pawn => &mut self.pawns,
            Role::Knight => &mut self.knights,
            Role::Bishop => &mut self.bishops,
            Role::Rook => &mut self.rooks,
            Role::Queen => &mut self.queens,
            Role::King => &mut self.kings,
        }
    }

    pub fn increment(&mut self, role: Role) {
        *self.slot(role) += 1;
    }

    pub fn get(&self, role: Role) -> u32 {
        match role {
            Role::Pawn => self.pawns,
            Role::Knight => self.knights,
            Role::Bishop => self.bishops,
            Role::Rook => self.rooks,
            Role::Queen => self.queens,
            Role::King => self.kings,
        }
    }

    pub fn total(&self) -> u32 {
        Role::ALL.iter().map(|r| self.get(*r)).sum()
    }
}

/// Statistics for one game. Created once by the game analyzer and not
/// modified afterwards.
///
/// `queen_lifetime` and `piece_moves` are only filled when their extractors
/// are enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub trades: u32,
    pub queen_moves: u32,
    pub piece_advancement: u32,
    pub central_pawns: u32,
    pub game_length: u32,
    pub castling_type: CastlingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queen_lifetime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_moves: Option<PieceMoveCounts>,
}

impl FeatureRecord {
    /// Numeric columns in output order, for column-wise reductions.
    pub fn numeric_columns(&self) -> Vec<(&'static str, f64)> {
        let mut columns = vec![
            ("trades", f64::from(self.trades)),
            ("queen_moves", f64::from(self.queen_moves)),
            ("piece_advancement", f64::from(self.piece_advancement)),
            ("central_pawns", f64::from(self.central_pawns)),
            ("game_length", f64::from(self.game_length)),
        ];
        if let Some(lifetime) = self.queen_lifetime {
            columns.push(("queen_lifetime", f64::from(lifetime)));
        }
        // Queen moves are already the queen_moves column.
        if let Some(counts) = self.piece_moves {
            columns.extend([
                ("pawn_moves", f64::from(counts.pawns)),
                ("knight_moves", f64::from(counts.knights)),
                ("bishop_moves", f64::from(counts.bishops)),
                ("rook_moves", f64::from(counts.rooks)),
                ("king_moves", f64::from(counts.kings)),
            ]);
        }
        columns
    }

    /// Flat `name -> value` JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castling_type_from_flags() {
        assert_eq!(CastlingType::from_flags(false, false), CastlingType::None);
        assert_eq!(CastlingType::from_flags(true, false), CastlingType::KingSide);
        assert_eq!(CastlingType::from_flags(false, true), CastlingType::QueenSide);
        assert_eq!(CastlingType::from_flags(true, true), CastlingType::Both);
        assert_eq!(CastlingType::KingSide.to_string(), "King-side");
    }

    #[test]
    fn test_piece_move_counts() {
        let mut counts = PieceMoveCounts::default();
        counts.increment(Role::Pawn);
        counts.increment(Role::Pawn);
        counts.increment(Role::King);
        assert_eq!(counts.get(Role::Pawn), 2);
        assert_eq!(counts.kings, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_record_json_shape() {
        let record = FeatureRecord {
            trades: 3,
            game_length: 40,
            castling_type: CastlingType::QueenSide,
            ..FeatureRecord::default()
        };
        let json = record.to_json();
        assert_eq!(json["trades"], 3);
        assert_eq!(json["castling_type"], "Queen-side");
        assert!(json.get("queen_lifetime").is_none());
        assert!(json.get("piece_moves").is_none());
        assert_eq!(record.numeric_columns().len(), 5);

        let with_counts = FeatureRecord {
            piece_moves: Some(PieceMoveCounts {
                pawns: 2,
                ..PieceMoveCounts::default()
            }),
            ..record
        };
        assert_eq!(with_counts.to_json()["piece_moves"]["Pawns"], 2);
        assert_eq!(with_counts.numeric_columns().len(), 10);
    }
}
