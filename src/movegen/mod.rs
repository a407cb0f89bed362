#[allow(clippy::module_inception)]
mod movegen;
pub use self::movegen::*;

mod piece_type;
pub use self::piece_type::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
