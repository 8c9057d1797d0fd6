pub mod castling_type;
pub mod central_pawns;
pub mod game_length;
pub mod piece_advancement;
pub mod piece_moves;
pub mod queen_lifetime;
pub mod queen_moves;
pub mod trades;
