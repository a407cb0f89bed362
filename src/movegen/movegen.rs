use crate::attacks::is_attacked;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::error::Error;
use crate::movegen::piece_type::pseudo_legals;
use crate::square::Square;
use log::trace;
use std::iter::ExactSizeIterator;

/// A list of moves, in generation order.
pub type MoveList = Vec<ChessMove>;

/// An incremental move generator
///
/// This structure enumerates moves for a board, either all pseudo-legal moves or only the legal
/// ones.  Every move it hands out is resolved: it knows which piece moves and whether it is a
/// capture, en passant, or castle.
///
/// Moves come out grouped by source square, in board-index order (a8 first), and in the order
/// each piece's rule produces them.  Pawn promotions always come out as knight, bishop, rook,
/// queen.
///
/// ```
/// use chessline::{Board, MoveGen, Square};
///
/// let board = Board::default();
/// let movegen = MoveGen::new_legal(&board).expect("one king each");
/// assert_eq!(movegen.len(), 20);
///
/// let knight = MoveGen::legal_from(&board, Square::G1).expect("one king each");
/// let targets: Vec<String> = knight.map(|m| m.get_dest().to_string()).collect();
/// assert_eq!(targets, vec!["h3", "f3"]);
/// ```
pub struct MoveGen {
    moves: MoveList,
    index: usize,
}

impl MoveGen {
    fn from_list(moves: MoveList) -> MoveGen {
        MoveGen { moves, index: 0 }
    }

    /// Create a new `MoveGen` structure, only generating legal moves.
    ///
    /// Fails with `IllegalPosition` unless the side to move has exactly one king, before and
    /// after every candidate move.
    pub fn new_legal(board: &Board) -> Result<MoveGen, Error> {
        let moves = MoveGen::pseudo_legal_moves(board, false)?;
        Ok(MoveGen::from_list(MoveGen::filter_legal(board, moves)?))
    }

    /// Create a new `MoveGen` structure, generating every pseudo-legal move.  Some of these may
    /// leave the mover's own king in check.
    pub fn new_pseudo_legal(board: &Board) -> Result<MoveGen, Error> {
        Ok(MoveGen::from_list(MoveGen::pseudo_legal_moves(board, false)?))
    }

    /// The legal moves of the piece on `square`.  An empty square, or a piece that is not on
    /// move, has none.
    pub fn legal_from(board: &Board, square: Square) -> Result<MoveGen, Error> {
        let moves = match board.color_on(square) {
            Some(color) if color == board.side_to_move() => {
                MoveGen::piece_moves(board, square, false)?
            }
            _ => MoveList::new(),
        };
        Ok(MoveGen::from_list(MoveGen::filter_legal(board, moves)?))
    }

    /// All pseudo-legal moves of the side to move.
    pub fn pseudo_legal_moves(board: &Board, ignore_castling: bool) -> Result<MoveList, Error> {
        let color = board.side_to_move();
        let mut moves = MoveList::with_capacity(64);
        for (square, piece) in board.pieces(color) {
            pseudo_legals(piece.role, board, square, color, ignore_castling, &mut moves)?;
        }
        Ok(moves)
    }

    /// The pseudo-legal moves of whatever piece stands on `square`, whichever side it belongs
    /// to.
    pub fn piece_moves(board: &Board, square: Square, ignore_castling: bool) -> Result<MoveList, Error> {
        let mut moves = MoveList::new();
        if let Some(piece) = board.piece_on(square) {
            pseudo_legals(piece.role, board, square, piece.color, ignore_castling, &mut moves)?;
        }
        Ok(moves)
    }

    /// Keep the moves that do not leave the mover's king attacked.
    fn filter_legal(board: &Board, moves: MoveList) -> Result<MoveList, Error> {
        let color = board.side_to_move();
        board.king_square(color)?;

        let mut legal = MoveList::with_capacity(moves.len());
        for m in moves {
            let after = board.make_move_new(m)?;
            let ksq = after.king_square(color)?;
            if is_attacked(&after, ksq, !color) {
                trace!("{} leaves the {} king on {} attacked in {}", m, color, ksq, board);
            } else {
                legal.push(m);
            }
        }
        Ok(legal)
    }
}

impl ExactSizeIterator for MoveGen {
    /// Give the exact length of this iterator
    fn len(&self) -> usize {
        self.moves.len() - self.index
    }
}

impl Iterator for MoveGen {
    type Item = ChessMove;

    /// Give a size_hint to some functions that need it
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    /// Find the next chess move.
    fn next(&mut self) -> Option<ChessMove> {
        let result = self.moves.get(self.index).copied();
        if result.is_some() {
            self.index += 1;
        }
        result
    }
}
