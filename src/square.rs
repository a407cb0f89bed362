use crate::color::Color;
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board.
///
/// Files and ranks both count from 1, so `a1` is `(1, 1)` and `h8` is `(8, 8)`.  A `Square` can
/// only be built with both coordinates on the board.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

/// Every square, in board-index order (a8, b8, ..., h8, a7, ..., h1).
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square { file: 1, rank: 8 }; NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square {
            file: (i % 8) as u8 + 1,
            rank: 8 - (i / 8) as u8,
        };
        i += 1;
    }
    squares
};

const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

macro_rules! define_squares {
    ($($name:ident = ($file:expr, $rank:expr)),* $(,)?) => {
        impl Square {
            $(
                pub const $name: Square = Square { file: $file, rank: $rank };
            )*
        }
    };
}

define_squares! {
    A8 = (1, 8), B8 = (2, 8), C8 = (3, 8), D8 = (4, 8), E8 = (5, 8), F8 = (6, 8), G8 = (7, 8), H8 = (8, 8),
    A7 = (1, 7), B7 = (2, 7), C7 = (3, 7), D7 = (4, 7), E7 = (5, 7), F7 = (6, 7), G7 = (7, 7), H7 = (8, 7),
    A6 = (1, 6), B6 = (2, 6), C6 = (3, 6), D6 = (4, 6), E6 = (5, 6), F6 = (6, 6), G6 = (7, 6), H6 = (8, 6),
    A5 = (1, 5), B5 = (2, 5), C5 = (3, 5), D5 = (4, 5), E5 = (5, 5), F5 = (6, 5), G5 = (7, 5), H5 = (8, 5),
    A4 = (1, 4), B4 = (2, 4), C4 = (3, 4), D4 = (4, 4), E4 = (5, 4), F4 = (6, 4), G4 = (7, 4), H4 = (8, 4),
    A3 = (1, 3), B3 = (2, 3), C3 = (3, 3), D3 = (4, 3), E3 = (5, 3), F3 = (6, 3), G3 = (7, 3), H3 = (8, 3),
    A2 = (1, 2), B2 = (2, 2), C2 = (3, 2), D2 = (4, 2), E2 = (5, 2), F2 = (6, 2), G2 = (7, 2), H2 = (8, 2),
    A1 = (1, 1), B1 = (2, 1), C1 = (3, 1), D1 = (4, 1), E1 = (5, 1), F1 = (6, 1), G1 = (7, 1), H1 = (8, 1),
}

impl Square {
    /// Make a square given a file and a rank, both in `1..=8`.  Anything else is `None`.
    ///
    /// ```
    /// use chessline::Square;
    ///
    /// assert_eq!(Square::new(5, 4), Some(Square::E4));
    /// assert_eq!(Square::new(0, 4), None);
    /// assert_eq!(Square::new(5, 9), None);
    /// ```
    #[inline]
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// The square stored at a flattened board index.  Index 0 is a8, index 63 is h1.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        ALL_SQUARES.get(index).copied()
    }

    /// The flattened board index, `(file - 1) + (8 - rank) * 8`.  Rank 8 is row 0, matching
    /// the order FEN lists the ranks in.
    #[inline]
    pub fn to_index(&self) -> usize {
        (self.file - 1) as usize + (8 - self.rank) as usize * 8
    }

    /// The file, from 1 (a) to 8 (h).
    #[inline]
    pub fn file(&self) -> u8 {
        self.file
    }

    /// The rank, from 1 to 8.
    #[inline]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// The file letter, `'a'` to `'h'`.
    #[inline]
    pub fn file_char(&self) -> char {
        FILE_NAMES[(self.file - 1) as usize]
    }

    /// The rank digit, `'1'` to `'8'`.
    #[inline]
    pub fn rank_char(&self) -> char {
        (b'0' + self.rank) as char
    }

    /// Step by `(df, dr)`.  If that walks off the board, return `None`.
    ///
    /// ```
    /// use chessline::Square;
    ///
    /// assert_eq!(Square::G1.offset(-1, 2), Some(Square::F3));
    /// assert_eq!(Square::H1.offset(1, 0), None);
    /// ```
    #[inline]
    pub fn offset(&self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// If there is a square above me, return that.  Otherwise, None.
    #[inline]
    pub fn up(&self) -> Option<Square> {
        self.offset(0, 1)
    }

    /// If there is a square below me, return that.  Otherwise, None.
    #[inline]
    pub fn down(&self) -> Option<Square> {
        self.offset(0, -1)
    }

    /// If there is a square to the left of me, return that.  Otherwise, None.
    #[inline]
    pub fn left(&self) -> Option<Square> {
        self.offset(-1, 0)
    }

    /// If there is a square to the right of me, return that.  Otherwise, None.
    #[inline]
    pub fn right(&self) -> Option<Square> {
        self.offset(1, 0)
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        self.offset(0, color.pawn_direction())
    }

    /// If there is a square "backward" given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn backward(&self, color: Color) -> Option<Square> {
        self.offset(0, -color.pawn_direction())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSquare {
            name: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        match (bytes[0], bytes[1]) {
            (f @ b'a'..=b'h', r @ b'1'..=b'8') => Ok(Square {
                file: f - b'a' + 1,
                rank: r - b'0',
            }),
            _ => Err(invalid()),
        }
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Square::from_str(&name).map_err(serde::de::Error::custom)
    }
}
