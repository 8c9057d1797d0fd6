use serde::{Deserialize, Serialize};

use crate::moves::Move;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameMetadata {
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2"
    pub date: Option<String>, // "YYYY.MM.DD"
    pub time_control: Option<String>,
    pub eco: Option<String>,
    pub event: Option<String>,
    pub link: Option<String>,
}

/// One game ready for replay: metadata plus decoded moves.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub metadata: GameMetadata,
    pub moves: Vec<Move>,
}

impl GameData {
    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self {
            metadata: GameMetadata::default(),
            moves,
        }
    }
}
