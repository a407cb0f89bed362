use crate::board::Board;
use crate::color::Color;
use crate::movegen::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use crate::piece::{Piece, Role};
use crate::square::Square;

/// Is `square` attacked by any piece of color `by`?
///
/// A square is attacked when one of `by`'s pieces could capture on it: pawns along their
/// forward diagonals (never straight ahead), knights and kings by their fixed steps, and
/// sliders along unobstructed rays.  Castling never attacks anything.  Whether the square is
/// empty does not matter, so this also answers "may the king pass through here?".
///
/// Rather than generating every move of every piece of `by` and looking for one that lands on
/// `square`, this looks outward from `square` for each kind of attacker.
///
/// ```
/// use chessline::{is_attacked, Board, Color, Square};
///
/// let board = Board::default();
/// assert!(is_attacked(&board, Square::F3, Color::White));
/// assert!(!is_attacked(&board, Square::E4, Color::White));
/// assert!(is_attacked(&board, Square::F6, Color::Black));
/// ```
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    let holds = |sq: Option<Square>, role: Role| {
        sq.and_then(|sq| board.piece_on(sq)) == Some(Piece::new(by, role))
    };

    // a pawn attacks one rank ahead of itself, so look one rank behind the target
    let behind = -by.pawn_direction();
    if holds(square.offset(-1, behind), Role::Pawn) || holds(square.offset(1, behind), Role::Pawn) {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(square.offset(df, dr), Role::Knight))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(square.offset(df, dr), Role::King))
    {
        return true;
    }

    ray_attack(board, square, by, &ROOK_DIRECTIONS, Role::Rook)
        || ray_attack(board, square, by, &BISHOP_DIRECTIONS, Role::Bishop)
}

/// Walk each ray out from `square` to the first occupied square, and see if it holds a `role`
/// or a queen of color `by`.
fn ray_attack(board: &Board, square: Square, by: Color, directions: &[(i8, i8)], role: Role) -> bool {
    for &(df, dr) in directions {
        let mut cur = square;
        while let Some(next) = cur.offset(df, dr) {
            if let Some(piece) = board.piece_on(next) {
                if piece.color == by && (piece.role == role || piece.role == Role::Queen) {
                    return true;
                }
                break;
            }
            cur = next;
        }
    }
    false
}
