//! Board replay core: board state, move replay and a PGN front end.
//!
//! Squares, colors and pieces are shakmaty's value types, re-exported here.

pub mod board;
pub mod game_data;
pub mod moves;
pub mod pgn;
pub mod replay;

pub use board::{Board, BoardError, CastlingRights};
pub use game_data::{GameData, GameMetadata};
pub use moves::{Move, ParseMoveError};
pub use replay::{replay, replay_all, Replay, ReplayError, ReplayStep};
pub use shakmaty::{CastlingSide, Color, File, Piece, Rank, Role, Square};
