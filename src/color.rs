use std::fmt;
use std::ops::Not;

/// Represent a color.
#[derive(PartialOrd, Ord, PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

/// How many colors are there?
pub const NUM_COLORS: usize = 2;
/// List all colors
pub const ALL_COLORS: [Color; NUM_COLORS] = [Color::White, Color::Black];

impl Color {
    /// Convert the `Color` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Which way do this color's pawns walk, in ranks per step?
    #[inline]
    pub fn pawn_direction(&self) -> i8 {
        match *self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The rank where this color's pieces start (1 for White, 8 for Black).
    #[inline]
    pub fn to_my_backrank(&self) -> u8 {
        match *self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// The rank where the opponent's pieces start, which is also where my pawns promote.
    #[inline]
    pub fn to_their_backrank(&self) -> u8 {
        (!*self).to_my_backrank()
    }

    /// The rank my pawns start on, and the only rank they may double push from.
    #[inline]
    pub fn to_second_rank(&self) -> u8 {
        match *self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// The side-to-move token used in FEN.
    #[inline]
    pub fn to_fen_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Parse the FEN side-to-move token.
    pub fn from_fen_token(token: &str) -> Option<Color> {
        match token {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }
}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_mirror_each_other() {
        assert_eq!(Color::White.to_my_backrank(), Color::Black.to_their_backrank());
        assert_eq!(Color::Black.to_my_backrank(), 8);
        assert_eq!(Color::White.to_second_rank(), 2);
        assert_eq!(Color::Black.to_second_rank(), 7);
        assert_eq!(!Color::White, Color::Black);
    }

    #[test]
    fn fen_tokens() {
        assert_eq!(Color::from_fen_token("w"), Some(Color::White));
        assert_eq!(Color::from_fen_token("b"), Some(Color::Black));
        assert_eq!(Color::from_fen_token("W"), None);
        assert_eq!(Color::Black.to_fen_char(), 'b');
    }
}
