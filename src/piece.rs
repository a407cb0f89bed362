use crate::color::Color;
use std::fmt;

/// Represent a piece type as a very simple enum
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How many ways can I promote?
pub const NUM_PROMOTION_ROLES: usize = 4;

/// What pieces can I promote to?
pub const PROMOTION_ROLES: [Role; NUM_PROMOTION_ROLES] =
    [Role::Knight, Role::Bishop, Role::Rook, Role::Queen];

impl Role {
    /// Convert the `Role` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The lowercase letter for this role, as used by FEN and coordinate notation.
    #[inline]
    pub fn to_char(&self) -> char {
        match *self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    /// Parse a role letter, in either case.
    pub fn from_char(c: char) -> Option<Role> {
        match c.to_ascii_lowercase() {
            'p' => Some(Role::Pawn),
            'n' => Some(Role::Knight),
            'b' => Some(Role::Bishop),
            'r' => Some(Role::Rook),
            'q' => Some(Role::Queen),
            'k' => Some(Role::King),
            _ => None,
        }
    }

    /// Can a pawn promote to this?
    #[inline]
    pub fn is_promotion_target(&self) -> bool {
        PROMOTION_ROLES.contains(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A colored piece, as it sits on the board.
///
/// Two pieces are the same piece when their color and role agree.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    #[inline]
    pub fn new(color: Color, role: Role) -> Piece {
        Piece { color, role }
    }

    /// Decode a FEN piece letter.  Uppercase is White, lowercase is Black.
    ///
    /// ```
    /// use chessline::{Color, Piece, Role};
    ///
    /// assert_eq!(Piece::from_fen_char('N'), Some(Piece::new(Color::White, Role::Knight)));
    /// assert_eq!(Piece::from_fen_char('q'), Some(Piece::new(Color::Black, Role::Queen)));
    /// assert_eq!(Piece::from_fen_char('x'), None);
    /// ```
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let role = Role::from_char(c)?;
        if c.is_ascii_uppercase() {
            Some(Piece::new(Color::White, role))
        } else {
            Some(Piece::new(Color::Black, role))
        }
    }

    /// Encode this piece as a FEN letter.
    #[inline]
    pub fn to_fen_char(&self) -> char {
        match self.color {
            Color::White => self.role.to_char().to_ascii_uppercase(),
            Color::Black => self.role.to_char(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}
