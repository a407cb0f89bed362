use crate::attacks::is_attacked;
use crate::castle_rights::{CastleRights, CastleType};
use crate::chess_move::ChessMove;
use crate::color::{Color, ALL_COLORS, NUM_COLORS};
use crate::error::Error;
use crate::movegen::MoveGen;
use crate::piece::{Piece, Role};
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use log::{debug, error};
use std::fmt;

/// A representation of a chess position.  That's why you're here, right?
///
/// A `Board` is a plain value.  Nothing on it mutates in place: making a move hands back a new
/// `Board` and leaves the old one alone, so any number of callers can branch off the same
/// position.  Every field is one of the six FEN fields, so a board is always fully described by
/// its `fen()`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
    side_to_move: Color,
    castle_rights: [CastleRights; NUM_COLORS],
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// What is the status of this game?
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BoardStatus {
    Ongoing,
    Stalemate,
    Checkmate,
}

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

impl Board {
    /// The standard starting position.
    ///
    /// ```
    /// use chessline::{Board, STARTING_FEN};
    ///
    /// assert_eq!(Board::new().fen(), STARTING_FEN);
    /// ```
    pub fn new() -> Board {
        let mut squares = [None; NUM_SQUARES];
        for (i, role) in BACK_RANK.iter().enumerate() {
            squares[i] = Some(Piece::new(Color::Black, *role));
            squares[8 + i] = Some(Piece::new(Color::Black, Role::Pawn));
            squares[48 + i] = Some(Piece::new(Color::White, Role::Pawn));
            squares[56 + i] = Some(Piece::new(Color::White, *role));
        }
        Board {
            squares,
            side_to_move: Color::White,
            castle_rights: [CastleRights::Both, CastleRights::Both],
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Assemble a board from already-validated FEN fields.
    pub(crate) fn from_parts(
        squares: [Option<Piece>; NUM_SQUARES],
        side_to_move: Color,
        castle_rights: [CastleRights; NUM_COLORS],
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Board {
        Board {
            squares,
            side_to_move,
            castle_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
        }
    }

    /// What piece is on a particular `Square`?  Is there even one?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.squares[square.to_index()]
    }

    /// What piece is at a flattened board index (0 is a8, 63 is h1)?  Out of range is empty.
    #[inline]
    pub fn piece_at_index(&self, index: usize) -> Option<Piece> {
        self.squares.get(index).copied().flatten()
    }

    /// What piece is at `file`, `rank` (both counted from 1)?  Off the board is empty.
    #[inline]
    pub fn piece_at(&self, file: u8, rank: u8) -> Option<Piece> {
        Square::new(file, rank).and_then(|sq| self.piece_on(sq))
    }

    /// What color piece is on a particular square?
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_on(square).map(|p| p.color)
    }

    /// The eight squares of a rank, from the a-file to the h-file.
    pub fn rank(&self, rank: u8) -> [Option<Piece>; 8] {
        let mut result = [None; 8];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self.piece_at(i as u8 + 1, rank);
        }
        result
    }

    /// The eight squares of a file, from the eighth rank down to the first.
    pub fn file(&self, file: u8) -> [Option<Piece>; 8] {
        let mut result = [None; 8];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self.piece_at(file, 8 - i as u8);
        }
        result
    }

    /// Every occupied square of `color`, in board-index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        ALL_SQUARES.iter().filter_map(move |sq| match self.piece_on(*sq) {
            Some(piece) if piece.color == color => Some((*sq, piece)),
            _ => None,
        })
    }

    /// Who's turn is it?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Grab the `CastleRights` for a particular side.
    #[inline]
    pub fn castle_rights(&self, color: Color) -> CastleRights {
        self.castle_rights[color.to_index()]
    }

    /// The square a pawn would land on when capturing en passant, if there is one.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Half moves since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// The move number, bumped after every Black move.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Where is `color`'s king?
    ///
    /// A position without exactly one king for `color` cannot have come from a legal game, so it
    /// is reported as an `IllegalPosition`.
    pub fn king_square(&self, color: Color) -> Result<Square, Error> {
        let king = Piece::new(color, Role::King);
        let mut kings = 0;
        let mut found = None;
        for sq in ALL_SQUARES.iter() {
            if self.piece_on(*sq) == Some(king) {
                kings += 1;
                found = Some(*sq);
            }
        }
        match found {
            Some(sq) if kings == 1 => Ok(sq),
            _ => {
                error!("{} has {} kings in {}", color, kings, self.fen());
                Err(Error::IllegalPosition { color, kings })
            }
        }
    }

    /// Is the side to move in check?
    pub fn in_check(&self) -> Result<bool, Error> {
        let ksq = self.king_square(self.side_to_move)?;
        Ok(is_attacked(self, ksq, !self.side_to_move))
    }

    /// Is this game over, and how?
    ///
    /// ```
    /// use chessline::{Board, BoardStatus};
    ///
    /// let mated: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
    ///     .parse()
    ///     .expect("valid fen");
    /// assert_eq!(mated.status().unwrap(), BoardStatus::Checkmate);
    /// assert_eq!(Board::default().status().unwrap(), BoardStatus::Ongoing);
    /// ```
    pub fn status(&self) -> Result<BoardStatus, Error> {
        if MoveGen::new_legal(self)?.len() > 0 {
            Ok(BoardStatus::Ongoing)
        } else if self.in_check()? {
            Ok(BoardStatus::Checkmate)
        } else {
            Ok(BoardStatus::Stalemate)
        }
    }

    /// Find the legal move with the same coordinates as `m`, with its piece and flags filled in.
    pub fn resolve(&self, m: ChessMove) -> Result<ChessMove, Error> {
        match MoveGen::new_legal(self)?.find(|x| *x == m) {
            Some(resolved) => Ok(resolved),
            None => {
                debug!("{} is not legal in {}", m, self.fen());
                Err(Error::IllegalMove {
                    uci: m.to_string(),
                    fen: self.fen(),
                })
            }
        }
    }

    /// Parse a coordinate move, check that it is legal, and play it.
    ///
    /// ```
    /// use chessline::Board;
    ///
    /// let board = Board::default().apply_uci("e2e4").expect("legal move");
    /// assert_eq!(board.fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
    /// assert!(board.apply_uci("e2e4").is_err());
    /// ```
    pub fn apply_uci(&self, uci: &str) -> Result<Board, Error> {
        let m = self.resolve(ChessMove::from_uci(uci)?)?;
        self.make_move_new(m)
    }

    /// Make a chess move onto a new board.
    ///
    /// The move is trusted to be at least pseudo-legal; use `resolve` or `apply_uci` to check a
    /// move from outside first.  Moving from an empty square, or moving the wrong side's piece,
    /// is an `InvalidMove`.
    ///
    /// ```
    /// use chessline::{Board, ChessMove, Square, Color};
    ///
    /// let m = ChessMove::new(Square::E2, Square::E4, None);
    /// let board = Board::default();
    /// let after = board.make_move_new(m).expect("valid move");
    /// assert_eq!(after.side_to_move(), Color::Black);
    /// assert_eq!(board.side_to_move(), Color::White);
    /// ```
    pub fn make_move_new(&self, m: ChessMove) -> Result<Board, Error> {
        let source = m.get_source();
        let dest = m.get_dest();
        let piece = match self.piece_on(source) {
            Some(piece) if piece.color == self.side_to_move => piece,
            _ => return Err(Error::InvalidMove { uci: m.to_string() }),
        };
        let color = piece.color;
        let mut result = *self;
        let mut capture = self.piece_on(dest).is_some();

        result.squares[source.to_index()] = None;
        result.squares[dest.to_index()] = Some(match m.get_promotion() {
            Some(role) => Piece::new(color, role),
            None => piece,
        });

        if piece.role == Role::Pawn
            && !capture
            && source.file() != dest.file()
            && self.en_passant == Some(dest)
        {
            // the captured pawn sits just behind the landing square
            if let Some(victim) = dest.backward(color) {
                result.squares[victim.to_index()] = None;
            }
            capture = true;
        }

        if piece.role == Role::King && (dest.file() as i8 - source.file() as i8).abs() == 2 {
            let castle = CastleType::from_king_dest(dest);
            let rook_source = castle.rook_source(color);
            result.squares[castle.rook_dest(color).to_index()] = self.piece_on(rook_source);
            result.squares[rook_source.to_index()] = None;
        }

        for c in ALL_COLORS.iter() {
            let lost = CastleRights::square_to_castle_rights(*c, source)
                .add(CastleRights::square_to_castle_rights(*c, dest));
            result.castle_rights[c.to_index()] = result.castle_rights[c.to_index()].remove(lost);
        }
        if piece.role == Role::King {
            result.castle_rights[color.to_index()] = CastleRights::NoRights;
        }

        // only publish an en passant square when an enemy pawn can actually use it
        result.en_passant = None;
        if piece.role == Role::Pawn && (dest.rank() as i8 - source.rank() as i8).abs() == 2 {
            let their_pawn = Some(Piece::new(!color, Role::Pawn));
            let exposed = [dest.left(), dest.right()]
                .iter()
                .flatten()
                .any(|sq| self.piece_on(*sq) == their_pawn);
            if exposed {
                result.en_passant = source.forward(color);
            }
        }

        result.halfmove_clock = if piece.role == Role::Pawn || capture {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if color == Color::Black {
            result.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        result.side_to_move = !self.side_to_move;

        Ok(result)
    }

    /// Draw the board as text, eighth rank first.
    ///
    /// ```
    /// use chessline::Board;
    ///
    /// let diagram = Board::default().diagram();
    /// assert!(diagram.starts_with("8  r  n  b  q  k  b  n  r"));
    /// ```
    pub fn diagram(&self) -> String {
        let mut s = String::new();
        for rank in (1..=8).rev() {
            s.push_str(&rank.to_string());
            s.push(' ');
            for piece in self.rank(rank).iter() {
                match piece {
                    Some(p) => {
                        s.push(' ');
                        s.push(p.to_fen_char());
                        s.push(' ');
                    }
                    None => s.push_str(" . "),
                }
            }
            s.push('\n');
        }
        s.push_str("   A  B  C  D  E  F  G  H\n");
        s.push_str(if self.side_to_move == Color::White {
            "White to move\n"
        } else {
            "Black to move\n"
        });
        s
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fen())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board({})", self.fen())
    }
}
