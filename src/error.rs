use crate::color::Color;
use crate::square::Square;
use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, PartialEq, Eq, Fail)]
pub enum Error {
    /// The FEN string is structurally invalid
    #[fail(display = "Malformed FEN string ({}): {}", reason, fen)]
    MalformedFen { fen: String, reason: &'static str },

    /// A position reached through move application does not have exactly one king for `color`.
    /// This is a logic defect upstream, not bad user input.
    #[fail(
        display = "Illegal position: expected exactly one {:?} king, found {}",
        color, kings
    )]
    IllegalPosition { color: Color, kings: usize },

    /// Pawn moves were requested for a pawn standing on the first or eighth rank
    #[fail(display = "Invalid pawn query: a pawn cannot stand on {}", square)]
    InvalidPawnQuery { square: Square },

    /// A square name could not be parsed
    #[fail(display = "Invalid square: {}", name)]
    InvalidSquare { name: String },

    /// A coordinate move could not be parsed, or refers to an empty source square
    #[fail(display = "Invalid move: {}", uci)]
    InvalidMove { uci: String },

    /// A coordinate move is well formed but not legal in the position
    #[fail(display = "Illegal move {} in position {}", uci, fen)]
    IllegalMove { uci: String, fen: String },

    /// Divided perft needs at least one ply to divide over
    #[fail(display = "Divided perft requires a depth of at least 1")]
    InvalidDepth,
}
