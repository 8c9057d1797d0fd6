#![allow(dead_code)]

use chess_core::{CastlingSide, Color, Move};

/// Parse coordinate moves (`e2e4`, `e7e8q`); `O-O`/`O-O-O` castle for the
/// side whose turn it is at that point of the list.
pub fn moves(list: &[&str]) -> Vec<Move> {
    list.iter()
        .enumerate()
        .map(|(ply, s)| {
            let color = if ply % 2 == 0 { Color::White } else { Color::Black };
            match *s {
                "O-O" => Move::castle(color, CastlingSide::KingSide),
                "O-O-O" => Move::castle(color, CastlingSide::QueenSide),
                other => other
                    .parse()
                    .unwrap_or_else(|_| panic!("invalid move: {other}")),
            }
        })
        .collect()
}

/// 1. e4 e5 2. Nf3 Nc6 3. Bb5
pub fn ruy_lopez() -> Vec<Move> {
    moves(&["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"])
}

/// Both queens shuffle and are then taken on their home squares on plies 10
/// and 11 (indices 9 and 10).
pub fn queen_trade() -> Vec<Move> {
    moves(&[
        "e2e4", "d7d6", "g1f3", "c8g4", "f3g5", "d8d7", "g5f7", "d7d8", "b1c3", "g4d1",
        "f7d8", "e8d8",
    ])
}

/// Giuoco Piano with both sides castling short, then some exchanges.
pub fn italian_castled() -> Vec<Move> {
    moves(&[
        "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "O-O", "g8f6", "d2d3", "O-O",
        "c1g5", "h7h6", "g5f6", "d8f6", "b1c3", "d7d6", "c3d5", "f6d8",
    ])
}

/// Queen's Gambit Declined with White castling long.
pub fn queens_gambit_long_castle() -> Vec<Move> {
    moves(&[
        "d2d4", "d7d5", "c2c4", "e7e6", "b1c3", "g8f6", "c1g5", "f8e7", "d1c2", "O-O",
        "O-O-O", "c7c5", "c4d5", "e6d5",
    ])
}

pub fn pgn(date: &str, movetext: &str) -> String {
    format!(
        "[Event \"Live Chess\"]\n[White \"alice\"]\n[Black \"bob\"]\n[Result \"*\"]\n[Date \"{date}\"]\n\n{movetext} *\n"
    )
}
