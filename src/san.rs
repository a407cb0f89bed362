//! Standard Algebraic Notation.
//!
//! Only rendering is supported.  Check and mate suffixes are never written.

use crate::board::Board;
use crate::castle_rights::CastleType;
use crate::chess_move::ChessMove;
use crate::error::Error;
use crate::movegen::MoveGen;
use crate::piece::Role;

/// Render a move in SAN for the given position.  The move only needs its coordinates; it is
/// resolved against the legal moves first, and an `IllegalMove` comes back if it is not one of
/// them.
///
/// ```
/// use chessline::{to_san, Board, ChessMove};
///
/// let board = Board::default();
/// assert_eq!(to_san(&board, ChessMove::from_uci("g1f3").unwrap()).unwrap(), "Nf3");
/// assert_eq!(to_san(&board, ChessMove::from_uci("e2e4").unwrap()).unwrap(), "e4");
/// ```
pub fn to_san(board: &Board, m: ChessMove) -> Result<String, Error> {
    let legal: Vec<ChessMove> = MoveGen::new_legal(board)?.collect();
    match legal.iter().find(|x| **x == m) {
        Some(resolved) => Ok(render(*resolved, &legal)),
        None => Err(Error::IllegalMove {
            uci: m.to_string(),
            fen: board.fen(),
        }),
    }
}

/// Every legal move of the position next to its SAN, in generation order.
pub fn legal_sans(board: &Board) -> Result<Vec<(ChessMove, String)>, Error> {
    let legal: Vec<ChessMove> = MoveGen::new_legal(board)?.collect();
    Ok(legal.iter().map(|m| (*m, render(*m, &legal))).collect())
}

/// The origin hint that tells `m` apart from other legal moves of the same kind of piece to the
/// same square.  Empty when nothing else goes there; otherwise the origin file, the origin
/// rank, or the whole origin square.
///
/// Both `m` and `legal` must come from the move generator of one position.
pub fn disambiguation(m: ChessMove, legal: &[ChessMove]) -> String {
    let source = m.get_source();
    let role = m.get_piece().map(|p| p.role);

    let mut ambiguous = false;
    let mut same_file = false;
    let mut same_rank = false;
    for other in legal {
        if other.get_source() == source
            || other.get_dest() != m.get_dest()
            || other.get_piece().map(|p| p.role) != role
        {
            continue;
        }
        ambiguous = true;
        if other.get_source().file() == source.file() {
            same_file = true;
        }
        if other.get_source().rank() == source.rank() {
            same_rank = true;
        }
    }

    if !ambiguous {
        String::new()
    } else if same_file && same_rank {
        source.to_string()
    } else if same_file {
        source.rank_char().to_string()
    } else {
        source.file_char().to_string()
    }
}

fn render(m: ChessMove, legal: &[ChessMove]) -> String {
    let role = m.get_piece().map(|p| p.role).unwrap_or(Role::Pawn);

    if m.is_castle() {
        return match CastleType::from_king_dest(m.get_dest()) {
            CastleType::Kingside => "O-O".to_string(),
            CastleType::Queenside => "O-O-O".to_string(),
        };
    }

    let mut san = String::with_capacity(8);
    if role == Role::Pawn {
        if m.is_capture() {
            san.push(m.get_source().file_char());
            san.push('x');
        }
        san.push_str(&m.get_dest().to_string());
        if let Some(promotion) = m.get_promotion() {
            san.push('=');
            san.push(promotion.to_char().to_ascii_uppercase());
        }
    } else {
        san.push(role.to_char().to_ascii_uppercase());
        san.push_str(&disambiguation(m, legal));
        if m.is_capture() {
            san.push('x');
        }
        san.push_str(&m.get_dest().to_string());
    }
    san
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn san(fen: &str, uci: &str) -> String {
        let board = Board::from_str(fen).expect("valid fen");
        to_san(&board, ChessMove::from_uci(uci).unwrap()).expect("legal move")
    }

    #[test]
    fn pawn_moves() {
        assert_eq!(san(crate::fen::STARTING_FEN, "e2e4"), "e4");
        assert_eq!(san("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1", "e4d5"), "exd5");
        assert_eq!(san("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1", "d5e6"), "dxe6");
    }

    #[test]
    fn promotions() {
        assert_eq!(san("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7a8q"), "a8=Q");
        assert_eq!(san("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7b8n"), "axb8=N");
    }

    #[test]
    fn piece_moves_and_captures() {
        assert_eq!(san("4k3/8/8/3p4/8/8/8/3QK3 w - - 0 1", "d1d5"), "Qxd5");
        assert_eq!(san("4k3/8/8/8/8/8/8/4K3 w - - 0 1", "e1e2"), "Ke2");
    }

    #[test]
    fn knights_split_by_file() {
        assert_eq!(san("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", "b1d2"), "Nbd2");
        assert_eq!(san("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", "f1d2"), "Nfd2");
    }

    #[test]
    fn rooks_on_one_file_split_by_rank() {
        assert_eq!(san("R3k3/8/8/8/8/8/8/R3K3 w - - 0 1", "a1a4"), "R1a4");
        assert_eq!(san("R3k3/8/8/8/8/8/8/R3K3 w - - 0 1", "a8a4"), "R8a4");
    }

    #[test]
    fn rooks_on_one_rank_split_by_file() {
        assert_eq!(san("4k3/8/8/8/8/8/8/R4RK1 w - - 0 1", "a1d1"), "Rad1");
        assert_eq!(san("4k3/8/8/8/8/8/8/R4RK1 w - - 0 1", "f1d1"), "Rfd1");
    }

    #[test]
    fn three_queens_need_the_full_square() {
        // queens on d1, h1 and h5 all reach f3; h1 shares a file with h5 and a rank with d1
        let fen = "k7/8/8/7Q/8/8/8/K2Q3Q w - - 0 1";
        assert_eq!(san(fen, "h1f3"), "Qh1f3");
        assert_eq!(san(fen, "h5f3"), "Q5f3");
        assert_eq!(san(fen, "d1f3"), "Qdf3");
        // only d1 and h5 reach e2
        assert_eq!(san(fen, "h5e2"), "Qhe2");
    }

    #[test]
    fn different_pieces_never_collide() {
        assert_eq!(san("4k3/8/8/8/8/8/8/1N2KB2 w - - 0 1", "b1d2"), "Nd2");
    }

    #[test]
    fn castling() {
        assert_eq!(san("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1"), "O-O");
        assert_eq!(san("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8c8"), "O-O-O");
    }

    #[test]
    fn illegal_moves_have_no_san() {
        let board = Board::default();
        match to_san(&board, ChessMove::from_uci("e2e5").unwrap()) {
            Err(Error::IllegalMove { uci, .. }) => assert_eq!(uci, "e2e5"),
            _ => panic!("e2e5 is not a legal opening move"),
        }
    }

    #[test]
    fn every_start_move_has_a_distinct_san() {
        let sans = legal_sans(&Board::default()).unwrap();
        assert_eq!(sans.len(), 20);
        let mut names: Vec<&String> = sans.iter().map(|(_, s)| s).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 20);
    }
}
