use crate::attacks::is_attacked;
use crate::board::Board;
use crate::castle_rights::ALL_CASTLE_TYPES;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::Error;
use crate::movegen::MoveList;
use crate::piece::{Piece, Role, PROMOTION_ROLES};
use crate::square::Square;
use log::error;

/// The eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The eight squares around a king.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// The movement rule for one kind of piece.
///
/// `pseudo_legals` appends every move the piece of `color` on `src` could make if leaving its
/// own king in check were allowed.  With `ignore_castling` set, the king skips castling.
pub trait PieceType {
    fn into_role() -> Role;
    fn pseudo_legals(
        board: &Board,
        src: Square,
        color: Color,
        ignore_castling: bool,
        moves: &mut MoveList,
    ) -> Result<(), Error>;
}

pub struct PawnType;
pub struct BishopType;
pub struct KnightType;
pub struct RookType;
pub struct QueenType;
pub struct KingType;

/// Dispatch to the rule for `role`.
pub fn pseudo_legals(
    role: Role,
    board: &Board,
    src: Square,
    color: Color,
    ignore_castling: bool,
    moves: &mut MoveList,
) -> Result<(), Error> {
    match role {
        Role::Pawn => PawnType::pseudo_legals(board, src, color, ignore_castling, moves),
        Role::Knight => KnightType::pseudo_legals(board, src, color, ignore_castling, moves),
        Role::Bishop => BishopType::pseudo_legals(board, src, color, ignore_castling, moves),
        Role::Rook => RookType::pseudo_legals(board, src, color, ignore_castling, moves),
        Role::Queen => QueenType::pseudo_legals(board, src, color, ignore_castling, moves),
        Role::King => KingType::pseudo_legals(board, src, color, ignore_castling, moves),
    }
}

/// Try to land on `dest`.  Returns whether a slider may keep going past it.
#[inline]
fn push_step(board: &Board, src: Square, dest: Square, piece: Piece, moves: &mut MoveList) -> bool {
    match board.piece_on(dest) {
        None => {
            moves.push(ChessMove::resolved(src, dest, None, piece, false));
            true
        }
        Some(other) => {
            if other.color != piece.color {
                moves.push(ChessMove::resolved(src, dest, None, piece, true));
            }
            false
        }
    }
}

fn steps(board: &Board, src: Square, piece: Piece, offsets: &[(i8, i8)], moves: &mut MoveList) {
    for &(df, dr) in offsets {
        if let Some(dest) = src.offset(df, dr) {
            push_step(board, src, dest, piece, moves);
        }
    }
}

fn rays(board: &Board, src: Square, piece: Piece, directions: &[(i8, i8)], moves: &mut MoveList) {
    for &(df, dr) in directions {
        let mut cur = src;
        while let Some(dest) = cur.offset(df, dr) {
            if !push_step(board, src, dest, piece, moves) {
                break;
            }
            cur = dest;
        }
    }
}

impl PawnType {
    /// Push one pawn move, or all four promotions when `dest` is on the last rank.
    fn push(moves: &mut MoveList, src: Square, dest: Square, piece: Piece, capture: bool, forward: bool) {
        let make = |promotion: Option<Role>| {
            let m = ChessMove::resolved(src, dest, promotion, piece, capture);
            if forward {
                m.non_controlling()
            } else {
                m
            }
        };
        if dest.rank() == piece.color.to_their_backrank() {
            for role in PROMOTION_ROLES.iter() {
                moves.push(make(Some(*role)));
            }
        } else {
            moves.push(make(None));
        }
    }
}

impl PieceType for PawnType {
    fn into_role() -> Role {
        Role::Pawn
    }

    fn pseudo_legals(
        board: &Board,
        src: Square,
        color: Color,
        _ignore_castling: bool,
        moves: &mut MoveList,
    ) -> Result<(), Error> {
        if src.rank() == 1 || src.rank() == 8 {
            error!("asked for pawn moves from {} in {}", src, board);
            return Err(Error::InvalidPawnQuery { square: src });
        }
        let piece = Piece::new(color, Self::into_role());

        if let Some(one) = src.forward(color) {
            if board.piece_on(one).is_none() {
                PawnType::push(moves, src, one, piece, false, true);

                if src.rank() == color.to_second_rank() {
                    if let Some(two) = one.forward(color) {
                        if board.piece_on(two).is_none() {
                            PawnType::push(moves, src, two, piece, false, true);
                        }
                    }
                }
            }
        }

        for df in [-1, 1].iter() {
            let target = match src.offset(*df, color.pawn_direction()) {
                Some(target) => target,
                None => continue,
            };
            match board.piece_on(target) {
                Some(victim) if victim.color != color => {
                    PawnType::push(moves, src, target, piece, true, false);
                }
                None if board.en_passant() == Some(target) => {
                    // the pawn being taken must actually be there, just behind the target
                    let passed = target.backward(color).and_then(|sq| board.piece_on(sq));
                    if passed == Some(Piece::new(!color, Role::Pawn)) {
                        moves.push(
                            ChessMove::resolved(src, target, None, piece, false).with_en_passant(),
                        );
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl PieceType for KnightType {
    fn into_role() -> Role {
        Role::Knight
    }

    fn pseudo_legals(
        board: &Board,
        src: Square,
        color: Color,
        _ignore_castling: bool,
        moves: &mut MoveList,
    ) -> Result<(), Error> {
        steps(board, src, Piece::new(color, Self::into_role()), &KNIGHT_OFFSETS, moves);
        Ok(())
    }
}

impl PieceType for BishopType {
    fn into_role() -> Role {
        Role::Bishop
    }

    fn pseudo_legals(
        board: &Board,
        src: Square,
        color: Color,
        _ignore_castling: bool,
        moves: &mut MoveList,
    ) -> Result<(), Error> {
        rays(board, src, Piece::new(color, Self::into_role()), &BISHOP_DIRECTIONS, moves);
        Ok(())
    }
}

impl PieceType for RookType {
    fn into_role() -> Role {
        Role::Rook
    }

    fn pseudo_legals(
        board: &Board,
        src: Square,
        color: Color,
        _ignore_castling: bool,
        moves: &mut MoveList,
    ) -> Result<(), Error> {
        rays(board, src, Piece::new(color, Self::into_role()), &ROOK_DIRECTIONS, moves);
        Ok(())
    }
}

impl PieceType for QueenType {
    fn into_role() -> Role {
        Role::Queen
    }

    fn pseudo_legals(
        board: &Board,
        src: Square,
        color: Color,
        _ignore_castling: bool,
        moves: &mut MoveList,
    ) -> Result<(), Error> {
        let piece = Piece::new(color, Self::into_role());
        rays(board, src, piece, &ROOK_DIRECTIONS, moves);
        rays(board, src, piece, &BISHOP_DIRECTIONS, moves);
        Ok(())
    }
}

impl PieceType for KingType {
    fn into_role() -> Role {
        Role::King
    }

    fn pseudo_legals(
        board: &Board,
        src: Square,
        color: Color,
        ignore_castling: bool,
        moves: &mut MoveList,
    ) -> Result<(), Error> {
        let piece = Piece::new(color, Self::into_role());
        steps(board, src, piece, &KING_OFFSETS, moves);

        if ignore_castling {
            return Ok(());
        }

        // We can castle iff:
        //  * the position says we still have the right.
        //  * the king and that rook are on their home squares.
        //  * the squares between the king and the rook are empty.
        //  * the king is not in check, and does not pass through or land on an attacked square.
        let rights = board.castle_rights(color);
        let rook = Some(Piece::new(color, Role::Rook));
        for castle_type in ALL_CASTLE_TYPES.iter() {
            if !rights.has(*castle_type) || src != castle_type.king_source(color) {
                continue;
            }
            if board.piece_on(castle_type.rook_source(color)) != rook {
                continue;
            }
            if castle_type
                .between_squares(color)
                .iter()
                .any(|sq| board.piece_on(*sq).is_some())
            {
                continue;
            }
            if castle_type
                .king_journey_squares(color)
                .iter()
                .any(|sq| is_attacked(board, *sq, !color))
            {
                continue;
            }
            moves.push(
                ChessMove::resolved(src, castle_type.king_dest(color), None, piece, false)
                    .with_castle(),
            );
        }
        Ok(())
    }
}
