//! PGN front end: regex-based header and movetext extraction, with SAN
//! resolved into core moves by replaying through shakmaty.

use regex::Regex;
use shakmaty::{san::San, Chess, Position, Square};
use thiserror::Error;

use crate::game_data::{GameData, GameMetadata};
use crate::moves::Move;

const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Error)]
pub enum PgnError {
    #[error("game starts from a non-standard position: {0}")]
    NonStandardStart(String),

    #[error("invalid SAN {san:?} at ply {ply}")]
    InvalidSan { ply: usize, san: String },

    #[error("illegal move {san:?} at ply {ply}")]
    IllegalMove { ply: usize, san: String },

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Compiled patterns for reading PGN text. Build once, reuse per game.
pub struct PgnReader {
    header_re: Regex,
    header_line_re: Regex,
    comment_re: Regex,
    move_re: Regex,
}

impl PgnReader {
    pub fn new() -> Result<Self, PgnError> {
        Ok(Self {
            header_re: Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#)?,
            header_line_re: Regex::new(r"\[[^\]]*\]")?,
            comment_re: Regex::new(r"\{[^}]*\}")?,
            move_re: Regex::new(
                r"[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?[+#]?|O-O-O|O-O",
            )?,
        })
    }

    /// Parse one PGN game into metadata and replayable moves.
    pub fn parse(&self, pgn: &str) -> Result<GameData, PgnError> {
        let mut metadata = GameMetadata {
            white: "Unknown".to_string(),
            black: "Unknown".to_string(),
            result: "*".to_string(),
            ..GameMetadata::default()
        };
        let mut setup = None;
        let mut fen = None;

        for cap in self.header_re.captures_iter(pgn) {
            let value = cap[2].to_string();
            match &cap[1] {
                "White" => metadata.white = value,
                "Black" => metadata.black = value,
                "Result" => metadata.result = value,
                "Date" => metadata.date = Some(value),
                "TimeControl" => metadata.time_control = Some(value),
                "ECO" => metadata.eco = Some(value),
                "Event" => metadata.event = Some(value),
                "Link" => metadata.link = Some(value),
                "SetUp" => setup = Some(value),
                "FEN" => fen = Some(value),
                _ => {}
            }
        }

        if setup.as_deref() == Some("1") {
            if let Some(f) = fen {
                if f != STANDARD_START_FEN {
                    return Err(PgnError::NonStandardStart(f));
                }
            }
        }

        let sans = self.extract_moves(pgn);
        let moves = resolve_san(&sans)?;

        Ok(GameData { metadata, moves })
    }

    /// SAN tokens of the mainline, with headers, comments and variations removed.
    pub fn extract_moves(&self, pgn: &str) -> Vec<String> {
        let no_headers = self.header_line_re.replace_all(pgn, "");
        let no_comments = self.comment_re.replace_all(&no_headers, "");
        let no_variations = strip_variations(&no_comments);

        self.move_re
            .find_iter(&no_variations)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Drop parenthesised variations, nested ones included. An unbalanced `)`
/// is ignored; an unclosed `(` swallows the rest of the text.
fn strip_variations(movetext: &str) -> String {
    let mut out = String::with_capacity(movetext.len());
    let mut depth = 0usize;
    for c in movetext.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Split a multi-game PGN file into one string per game. A header line that
/// follows movetext starts a new game.
pub fn split_games(text: &str) -> Vec<String> {
    let mut games = Vec::new();
    let mut current = String::new();
    let mut seen_movetext = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && seen_movetext {
            games.push(std::mem::take(&mut current));
            seen_movetext = false;
        }
        if !trimmed.is_empty() && !trimmed.starts_with('[') {
            seen_movetext = true;
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.trim().is_empty() {
        games.push(current);
    }
    games
}

/// Resolve SAN strings against the standard start position.
pub fn resolve_san(sans: &[String]) -> Result<Vec<Move>, PgnError> {
    let mut pos = Chess::default();
    let mut moves = Vec::with_capacity(sans.len());

    for (ply, san_str) in sans.iter().enumerate() {
        let san: San = san_str.parse().map_err(|_| PgnError::InvalidSan {
            ply,
            san: san_str.clone(),
        })?;
        let mv = san.to_move(&pos).map_err(|_| PgnError::IllegalMove {
            ply,
            san: san_str.clone(),
        })?;
        let core = convert_move(&mv).ok_or_else(|| PgnError::IllegalMove {
            ply,
            san: san_str.clone(),
        })?;
        pos.play_unchecked(mv);
        moves.push(core);
    }

    Ok(moves)
}

/// Map a shakmaty move onto the core representation. Castling becomes a
/// king move to the g- or c-file with the castling flag set.
fn convert_move(mv: &shakmaty::Move) -> Option<Move> {
    match *mv {
        shakmaty::Move::Normal {
            from,
            to,
            promotion,
            ..
        } => Some(Move {
            from,
            to,
            promotion,
            castling: false,
        }),
        shakmaty::Move::EnPassant { from, to } => Some(Move::new(from, to)),
        shakmaty::Move::Castle { king, .. } => {
            let side = mv.castling_side()?;
            Some(Move {
                from: king,
                to: Square::from_coords(side.king_to_file(), king.rank()),
                promotion: None,
                castling: true,
            })
        }
        shakmaty::Move::Put { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pgn_basic() {
        let pgn = r#"[White "Player1"]
[Black "Player2"]
[Result "1-0"]
[Date "2025.01.15"]
[TimeControl "600"]

1. e4 e5 2. Nf3 Nc6 1-0"#;

        let reader = PgnReader::new().unwrap();
        let game = reader.parse(pgn).unwrap();
        assert_eq!(game.metadata.white, "Player1");
        assert_eq!(game.metadata.black, "Player2");
        assert_eq!(game.metadata.result, "1-0");
        assert_eq!(game.metadata.date.as_deref(), Some("2025.01.15"));
        assert_eq!(game.moves.len(), 4);
        assert_eq!(game.moves[0], "e2e4".parse().unwrap());
        assert_eq!(game.moves[3], "b8c6".parse().unwrap());
    }

    #[test]
    fn test_comments_and_variations_are_skipped() {
        let pgn = "1. d4 {main idea} d5 (1... Nf6 2. c4) 2. c4 *";
        let reader = PgnReader::new().unwrap();
        assert_eq!(reader.extract_moves(pgn), vec!["d4", "d5", "c4"]);
    }

    #[test]
    fn test_nested_variations_are_skipped() {
        let reader = PgnReader::new().unwrap();
        let pgn = "1. e4 (1. d4 (1. c4) d5) e5 2. Nf3 *";
        assert_eq!(reader.extract_moves(pgn), vec!["e4", "e5", "Nf3"]);

        let game = reader.parse(pgn).unwrap();
        assert_eq!(game.moves.len(), 3);
        assert_eq!(game.moves[1], "e7e5".parse().unwrap());
    }

    #[test]
    fn test_castling_and_promotion_are_flagged() {
        let sans: Vec<String> = ["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "O-O"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let moves = resolve_san(&sans).unwrap();
        let castle = moves[6];
        assert!(castle.castling);
        assert_eq!((castle.from, castle.to), (Square::E1, Square::G1));
        assert_eq!(
            castle.castling_side(),
            Some(shakmaty::CastlingSide::KingSide)
        );
    }

    #[test]
    fn test_illegal_san_is_reported() {
        let sans = vec!["e4".to_string(), "e4".to_string()];
        assert!(matches!(
            resolve_san(&sans),
            Err(PgnError::IllegalMove { ply: 1, .. })
        ));
    }

    #[test]
    fn test_non_standard_start_is_rejected() {
        let pgn = r#"[SetUp "1"]
[FEN "8/8/8/8/8/8/8/K6k w - - 0 1"]

1. Kb1 *"#;
        let reader = PgnReader::new().unwrap();
        assert!(matches!(
            reader.parse(pgn),
            Err(PgnError::NonStandardStart(_))
        ));
    }

    #[test]
    fn test_split_games() {
        let text = "[Event \"A\"]\n\n1. e4 e5 1-0\n\n[Event \"B\"]\n[White \"x\"]\n\n1. d4 0-1\n";
        let games = split_games(text);
        assert_eq!(games.len(), 2);
        assert!(games[0].contains("e4"));
        assert!(games[1].contains("[White \"x\"]"));
        assert!(games[1].contains("d4"));
    }
}
