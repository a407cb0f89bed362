use crate::error::Error;
use crate::piece::{Piece, Role};
use crate::square::Square;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Represent a ChessMove in memory.
///
/// A move is identified by its source, destination and promotion.  Moves produced by the move
/// generator (or by `Board::resolve`) also carry the moving piece and a few flags resolved
/// against the position they came from.  Those extras are derived data: two moves with the same
/// coordinates compare equal whether or not they have been resolved.
#[derive(Clone, Copy, Debug)]
pub struct ChessMove {
    source: Square,
    dest: Square,
    promotion: Option<Role>,
    piece: Option<Piece>,
    capture: bool,
    en_passant: bool,
    castle: bool,
    controlling: bool,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square`, a destination `Square`, and an optional
    /// promotion `Role`.  The move is not tied to any position.
    #[inline]
    pub fn new(source: Square, dest: Square, promotion: Option<Role>) -> ChessMove {
        ChessMove {
            source,
            dest,
            promotion,
            piece: None,
            capture: false,
            en_passant: false,
            castle: false,
            controlling: true,
        }
    }

    /// A move resolved against a position: who moves, and whether it takes something.
    #[inline]
    pub(crate) fn resolved(
        source: Square,
        dest: Square,
        promotion: Option<Role>,
        piece: Piece,
        capture: bool,
    ) -> ChessMove {
        ChessMove {
            source,
            dest,
            promotion,
            piece: Some(piece),
            capture,
            en_passant: false,
            castle: false,
            controlling: true,
        }
    }

    /// Mark a pawn's forward push, which never controls its destination.
    #[inline]
    pub(crate) fn non_controlling(mut self) -> ChessMove {
        self.controlling = false;
        self
    }

    #[inline]
    pub(crate) fn with_en_passant(mut self) -> ChessMove {
        self.en_passant = true;
        self.capture = true;
        self
    }

    #[inline]
    pub(crate) fn with_castle(mut self) -> ChessMove {
        self.castle = true;
        self
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }

    /// Get the promotion role (maybe).
    #[inline]
    pub fn get_promotion(&self) -> Option<Role> {
        self.promotion
    }

    /// The piece that moves, if this move has been resolved against a position.
    #[inline]
    pub fn get_piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Does this move take a piece?  En passant counts.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.castle
    }

    /// False for a pawn's forward push.  Such a move says nothing about which squares the pawn
    /// attacks.
    #[inline]
    pub fn is_controlling(&self) -> bool {
        self.controlling
    }

    /// Convert coordinate notation (`e2e4`, `e7e8q`) to a move.
    ///
    /// ```
    /// use chessline::{ChessMove, Square, Role};
    ///
    /// let mv = ChessMove::new(Square::E7, Square::E8, Some(Role::Queen));
    ///
    /// assert_eq!(ChessMove::from_uci("e7e8q").expect("Valid Move"), mv);
    /// ```
    pub fn from_uci(s: &str) -> Result<ChessMove, Error> {
        let invalid = || Error::InvalidMove { uci: s.to_string() };

        if s.len() != 4 && s.len() != 5 {
            return Err(invalid());
        }
        let source = s.get(0..2).ok_or_else(invalid)?.parse::<Square>().map_err(|_| invalid())?;
        let dest = s.get(2..4).ok_or_else(invalid)?.parse::<Square>().map_err(|_| invalid())?;

        let mut promo = None;
        if s.len() == 5 {
            promo = Some(match s.chars().last() {
                Some('q') => Role::Queen,
                Some('r') => Role::Rook,
                Some('n') => Role::Knight,
                Some('b') => Role::Bishop,
                _ => return Err(invalid()),
            });
        }

        Ok(ChessMove::new(source, dest, promo))
    }

    fn key(&self) -> (Square, Square, Option<Role>) {
        (self.source, self.dest, self.promotion)
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &ChessMove) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for ChessMove {
    fn partial_cmp(&self, other: &ChessMove) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChessMove {
    fn cmp(&self, other: &ChessMove) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChessMove::from_uci(s)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.promotion {
            None => write!(f, "{}{}", self.source, self.dest),
            Some(x) => write!(f, "{}{}{}", self.source, self.dest, x),
        }
    }
}

/// Moves go over the wire in coordinate notation.  Only the coordinates survive; a move read
/// back in is unresolved until `Board::resolve` matches it against a position.
#[cfg(feature = "serialize")]
impl serde::Serialize for ChessMove {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for ChessMove {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let uci = <String as serde::Deserialize>::deserialize(deserializer)?;
        ChessMove::from_uci(&uci).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn invalid_uci_moves() {
        assert!(ChessMove::from_uci("e2e-").is_err());
        assert!(ChessMove::from_uci("").is_err());
        assert!(ChessMove::from_uci("e7e8p").is_err());
        assert!(ChessMove::from_uci("e7e8z").is_err());
        assert!(ChessMove::from_uci("e7e8qq").is_err());
        assert!(ChessMove::from_uci("i2e4").is_err());
    }

    #[test]
    fn valid_uci_moves() {
        assert_eq!(
            ChessMove::from_uci("e2e4").unwrap(),
            ChessMove::new(Square::E2, Square::E4, None)
        );
        assert_eq!(
            ChessMove::from_uci("g1f3").unwrap(),
            ChessMove::new(Square::G1, Square::F3, None)
        );
        assert_eq!(
            ChessMove::from_uci("a7a8n").unwrap(),
            ChessMove::new(Square::A7, Square::A8, Some(Role::Knight))
        );
    }

    #[test]
    fn display_matches_uci() {
        for uci in &["e2e4", "h7h8q", "b2a1n", "e1g1"] {
            assert_eq!(ChessMove::from_uci(uci).unwrap().to_string(), *uci);
        }
    }

    #[test]
    fn equality_ignores_resolution() {
        let bare = ChessMove::new(Square::E2, Square::E4, None);
        let resolved = ChessMove::resolved(
            Square::E2,
            Square::E4,
            None,
            Piece::new(Color::White, Role::Pawn),
            false,
        )
        .non_controlling();
        assert_eq!(bare, resolved);
        assert!(bare.is_controlling());
        assert!(!resolved.is_controlling());
        assert_eq!(bare.get_piece(), None);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn serde_uses_coordinate_notation() {
        let resolved = ChessMove::resolved(
            Square::D5,
            Square::E6,
            None,
            Piece::new(Color::White, Role::Pawn),
            false,
        )
        .with_en_passant();
        let json = serde_json::to_string(&resolved).unwrap();
        assert_eq!(json, "\"d5e6\"");

        let back: ChessMove = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resolved);
        assert_eq!(back.get_piece(), None);
        assert!(!back.is_en_passant());

        assert!(serde_json::from_str::<ChessMove>("\"a0a9\"").is_err());
        assert!(serde_json::from_str::<ChessMove>(
            r#"{"source":{"file":0,"rank":9},"dest":"e4","capture":true}"#
        )
        .is_err());
    }

}
