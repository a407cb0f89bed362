use crate::color::Color;
use crate::square::Square;

/// What castle rights does a particular player have?
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum CastleRights {
    NoRights,
    KingSide,
    QueenSide,
    Both,
}

/// How many different types of `CastleRights` are there?
pub const NUM_CASTLE_RIGHTS: usize = 4;

/// Enumerate all castle rights.
pub const ALL_CASTLE_RIGHTS: [CastleRights; NUM_CASTLE_RIGHTS] = [
    CastleRights::NoRights,
    CastleRights::KingSide,
    CastleRights::QueenSide,
    CastleRights::Both,
];

/// Which side of the board a castle goes to.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum CastleType {
    Kingside,
    Queenside,
}

pub const ALL_CASTLE_TYPES: [CastleType; 2] = [CastleType::Kingside, CastleType::Queenside];

impl CastleType {
    /// The right that allows this castle.
    #[inline]
    pub fn to_castle_rights(&self) -> CastleRights {
        match *self {
            CastleType::Kingside => CastleRights::KingSide,
            CastleType::Queenside => CastleRights::QueenSide,
        }
    }

    /// The FEN letter for this castle, for `color`.
    pub fn to_fen_char(&self, color: Color) -> char {
        let c = match *self {
            CastleType::Kingside => 'k',
            CastleType::Queenside => 'q',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Where the king starts.
    #[inline]
    pub fn king_source(&self, color: Color) -> Square {
        match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// Where the king lands.
    pub fn king_dest(&self, color: Color) -> Square {
        match (*self, color) {
            (CastleType::Kingside, Color::White) => Square::G1,
            (CastleType::Queenside, Color::White) => Square::C1,
            (CastleType::Kingside, Color::Black) => Square::G8,
            (CastleType::Queenside, Color::Black) => Square::C8,
        }
    }

    /// The corner the rook starts from.
    pub fn rook_source(&self, color: Color) -> Square {
        match (*self, color) {
            (CastleType::Kingside, Color::White) => Square::H1,
            (CastleType::Queenside, Color::White) => Square::A1,
            (CastleType::Kingside, Color::Black) => Square::H8,
            (CastleType::Queenside, Color::Black) => Square::A8,
        }
    }

    /// Where the rook lands, right next to the king on the inside.
    pub fn rook_dest(&self, color: Color) -> Square {
        match (*self, color) {
            (CastleType::Kingside, Color::White) => Square::F1,
            (CastleType::Queenside, Color::White) => Square::D1,
            (CastleType::Kingside, Color::Black) => Square::F8,
            (CastleType::Queenside, Color::Black) => Square::D8,
        }
    }

    /// The squares strictly between the king and the rook, which must all be empty.
    pub fn between_squares(&self, color: Color) -> &'static [Square] {
        match (*self, color) {
            (CastleType::Kingside, Color::White) => &[Square::F1, Square::G1],
            (CastleType::Queenside, Color::White) => &[Square::D1, Square::C1, Square::B1],
            (CastleType::Kingside, Color::Black) => &[Square::F8, Square::G8],
            (CastleType::Queenside, Color::Black) => &[Square::D8, Square::C8, Square::B8],
        }
    }

    /// The squares the king stands on, passes through, and lands on.  None of these may be
    /// attacked.  The rook's path (b1/b8 on the queenside) is not part of the king's journey.
    pub fn king_journey_squares(&self, color: Color) -> &'static [Square] {
        match (*self, color) {
            (CastleType::Kingside, Color::White) => &[Square::E1, Square::F1, Square::G1],
            (CastleType::Queenside, Color::White) => &[Square::E1, Square::D1, Square::C1],
            (CastleType::Kingside, Color::Black) => &[Square::E8, Square::F8, Square::G8],
            (CastleType::Queenside, Color::Black) => &[Square::E8, Square::D8, Square::C8],
        }
    }

    /// Which castle does a two-file king step toward `dest` describe?
    pub fn from_king_dest(dest: Square) -> CastleType {
        if dest.file() > 5 {
            CastleType::Kingside
        } else {
            CastleType::Queenside
        }
    }
}

impl CastleRights {
    /// Can I castle kingside?
    #[inline]
    pub fn has_kingside(&self) -> bool {
        self.to_index() & 1 == 1
    }

    /// Can I castle queenside?
    #[inline]
    pub fn has_queenside(&self) -> bool {
        self.to_index() & 2 == 2
    }

    /// Can I castle to this side?
    #[inline]
    pub fn has(&self, castle_type: CastleType) -> bool {
        match castle_type {
            CastleType::Kingside => self.has_kingside(),
            CastleType::Queenside => self.has_queenside(),
        }
    }

    /// Which of `color`'s rights are lost when a piece leaves, or is captured on, `sq`?
    ///
    /// The king's home square takes both rights; the rook corners take one each.
    pub fn square_to_castle_rights(color: Color, sq: Square) -> CastleRights {
        let backrank = color.to_my_backrank();
        if sq.rank() != backrank {
            return CastleRights::NoRights;
        }
        match sq.file() {
            1 => CastleRights::QueenSide,
            5 => CastleRights::Both,
            8 => CastleRights::KingSide,
            _ => CastleRights::NoRights,
        }
    }

    /// Remove castle rights, and return a new `CastleRights`.
    #[inline]
    pub fn remove(&self, remove: CastleRights) -> CastleRights {
        CastleRights::from_index(self.to_index() & !remove.to_index())
    }

    /// Add some castle rights, and return a new `CastleRights`.
    #[inline]
    pub fn add(&self, add: CastleRights) -> CastleRights {
        CastleRights::from_index(self.to_index() | add.to_index())
    }

    /// Convert `CastleRights` to `usize` for table lookups
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Convert `usize` to `CastleRights`.  Only the low two bits are looked at.
    #[inline]
    pub fn from_index(i: usize) -> CastleRights {
        ALL_CASTLE_RIGHTS[i & 3]
    }

    /// Convert the castle rights to an FEN compatible string.
    ///
    /// ```
    /// use chessline::{CastleRights, Color};
    ///
    /// assert_eq!(CastleRights::NoRights.to_string(Color::White), "");
    /// assert_eq!(CastleRights::Both.to_string(Color::Black), "kq");
    /// assert_eq!(CastleRights::KingSide.to_string(Color::White), "K");
    /// assert_eq!(CastleRights::QueenSide.to_string(Color::Black), "q");
    /// ```
    pub fn to_string(&self, color: Color) -> String {
        let result = match *self {
            CastleRights::NoRights => "",
            CastleRights::KingSide => "k",
            CastleRights::QueenSide => "q",
            CastleRights::Both => "kq",
        };

        if color == Color::White {
            result.to_uppercase()
        } else {
            result.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove() {
        let rights = CastleRights::NoRights
            .add(CastleRights::KingSide)
            .add(CastleRights::QueenSide);
        assert_eq!(rights, CastleRights::Both);
        assert_eq!(rights.remove(CastleRights::KingSide), CastleRights::QueenSide);
        assert_eq!(
            rights.remove(CastleRights::Both),
            CastleRights::NoRights
        );
        assert!(CastleRights::QueenSide.has(CastleType::Queenside));
        assert!(!CastleRights::QueenSide.has(CastleType::Kingside));
    }

    #[test]
    fn home_squares_map_to_rights() {
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::White, Square::A1),
            CastleRights::QueenSide
        );
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::White, Square::H1),
            CastleRights::KingSide
        );
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::White, Square::E1),
            CastleRights::Both
        );
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::White, Square::H8),
            CastleRights::NoRights
        );
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::Black, Square::H8),
            CastleRights::KingSide
        );
        assert_eq!(
            CastleRights::square_to_castle_rights(Color::Black, Square::D8),
            CastleRights::NoRights
        );
    }

    #[test]
    fn castle_geometry() {
        let qs = CastleType::Queenside;
        assert_eq!(qs.king_dest(Color::Black), Square::C8);
        assert_eq!(qs.rook_dest(Color::Black), Square::D8);
        assert!(!qs.king_journey_squares(Color::White).contains(&Square::B1));
        assert!(qs.between_squares(Color::White).contains(&Square::B1));
        assert_eq!(CastleType::from_king_dest(Square::G8), CastleType::Kingside);
        assert_eq!(CastleType::from_king_dest(Square::C1), CastleType::Queenside);
    }
}
