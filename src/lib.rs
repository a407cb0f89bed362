//! # Chess position and legal move generation
//!
//! A `Board` is an immutable chess position, built from (and always writable back to) a FEN
//! string.  `MoveGen` enumerates its legal moves, `make_move_new` produces the position after a
//! move, `to_san` renders a move in Standard Algebraic Notation, and `perft` counts the move tree
//! for checking all of that against a reference engine.
//!
//! ## Example
//!
//! ```
//! use chessline::{perft, to_san, Board, ChessMove, MoveGen, Square};
//!
//! let board = Board::default();
//! assert_eq!(MoveGen::new_legal(&board).unwrap().len(), 20);
//!
//! let m = ChessMove::new(Square::E2, Square::E4, None);
//! assert_eq!(to_san(&board, m).unwrap(), "e4");
//!
//! let after = board.make_move_new(m).unwrap();
//! assert_eq!(perft(&after, 1).unwrap(), 20);
//! ```

mod attacks;
pub use crate::attacks::*;

mod board;
pub use crate::board::*;

mod castle_rights;
pub use crate::castle_rights::*;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod error;
pub use crate::error::*;

mod fen;
pub use crate::fen::*;

mod movegen;
pub use crate::movegen::{MoveGen, MoveList};

mod perft;
pub use crate::perft::*;

mod piece;
pub use crate::piece::*;

mod san;
pub use crate::san::*;

mod square;
pub use crate::square::*;
