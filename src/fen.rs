use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::{Color, NUM_COLORS};
use crate::error::Error;
use crate::piece::Piece;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use arrayvec::ArrayVec;
use log::debug;
use std::str::FromStr;

/// The standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const NUM_FEN_FIELDS: usize = 6;

impl Board {
    /// Serialize this position as a six field FEN string.  Runs of empty squares are written as
    /// a single digit.
    ///
    /// ```
    /// use chessline::{Board, STARTING_FEN};
    ///
    /// assert_eq!(Board::default().fen(), STARTING_FEN);
    /// ```
    pub fn fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        let mut empty = 0;
        for (i, sq) in ALL_SQUARES.iter().enumerate() {
            match self.piece_on(*sq) {
                Some(piece) => {
                    if empty != 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(piece.to_fen_char());
                }
                None => empty += 1,
            }

            if i % 8 == 7 {
                if empty != 0 {
                    fen.push_str(&empty.to_string());
                    empty = 0;
                }
                if i != NUM_SQUARES - 1 {
                    fen.push('/');
                }
            }
        }

        fen.push(' ');
        fen.push(self.side_to_move().to_fen_char());
        fen.push(' ');

        let white = self.castle_rights(Color::White);
        let black = self.castle_rights(Color::Black);
        if white == CastleRights::NoRights && black == CastleRights::NoRights {
            fen.push('-');
        } else {
            fen.push_str(&white.to_string(Color::White));
            fen.push_str(&black.to_string(Color::Black));
        }

        fen.push(' ');
        match self.en_passant() {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(
            " {} {}",
            self.halfmove_clock(),
            self.fullmove_number()
        ));
        fen
    }
}

fn parse_placement(
    placement: &str,
    malformed: &dyn Fn(&'static str) -> Error,
) -> Result<[Option<Piece>; NUM_SQUARES], Error> {
    let mut squares = [None; NUM_SQUARES];
    let mut row = 0;
    let mut width = 0;

    for c in placement.chars() {
        match c {
            '/' => {
                if width != 8 {
                    return Err(malformed("a rank does not cover eight squares"));
                }
                row += 1;
                width = 0;
                if row >= 8 {
                    return Err(malformed("more than eight ranks"));
                }
            }
            '1'..='8' => {
                width += c as usize - '0' as usize;
                if width > 8 {
                    return Err(malformed("empty squares run past the end of a rank"));
                }
            }
            _ => {
                let piece = Piece::from_fen_char(c).ok_or_else(|| malformed("unknown piece letter"))?;
                if width >= 8 {
                    return Err(malformed("pieces run past the end of a rank"));
                }
                squares[row * 8 + width] = Some(piece);
                width += 1;
            }
        }
    }

    if row != 7 || width != 8 {
        return Err(malformed("placement does not cover 64 squares"));
    }
    Ok(squares)
}

fn parse_castle_rights(
    castles: &str,
    malformed: &dyn Fn(&'static str) -> Error,
) -> Result<[CastleRights; NUM_COLORS], Error> {
    let mut rights = [CastleRights::NoRights; NUM_COLORS];
    if castles == "-" {
        return Ok(rights);
    }
    for c in castles.chars() {
        let (color, right) = match c {
            'K' => (Color::White, CastleRights::KingSide),
            'Q' => (Color::White, CastleRights::QueenSide),
            'k' => (Color::Black, CastleRights::KingSide),
            'q' => (Color::Black, CastleRights::QueenSide),
            _ => return Err(malformed("unknown castling right")),
        };
        rights[color.to_index()] = rights[color.to_index()].add(right);
    }
    Ok(rights)
}

impl FromStr for Board {
    type Err = Error;

    /// Parse a six field FEN string.
    ///
    /// ```
    /// use chessline::{Board, Error};
    /// use std::str::FromStr;
    ///
    /// let board = Board::from_str("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0")
    ///     .expect("valid fen");
    /// assert_eq!(board.fullmove_number(), 0);
    ///
    /// match Board::from_str("8/8/8/8/8/8/8/9 w - - 0 1") {
    ///     Err(Error::MalformedFen { .. }) => {}
    ///     _ => panic!("nine empty squares in one rank"),
    /// }
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &'static str| {
            debug!("rejecting FEN {:?}: {}", value, reason);
            Error::MalformedFen {
                fen: value.to_string(),
                reason,
            }
        };

        let mut fields: ArrayVec<&str, NUM_FEN_FIELDS> = ArrayVec::new();
        for token in value.split_whitespace() {
            fields
                .try_push(token)
                .map_err(|_| malformed("more than six fields"))?;
        }
        if !fields.is_full() {
            return Err(malformed("fewer than six fields"));
        }

        let squares = parse_placement(fields[0], &malformed)?;
        let side_to_move =
            Color::from_fen_token(fields[1]).ok_or_else(|| malformed("side to move must be w or b"))?;
        let castle_rights = parse_castle_rights(fields[2], &malformed)?;
        let en_passant = match fields[3] {
            "-" => None,
            ep => Some(
                ep.parse::<Square>()
                    .map_err(|_| malformed("bad en passant square"))?,
            ),
        };
        let halfmove_clock = fields[4]
            .parse::<u32>()
            .map_err(|_| malformed("halfmove clock is not a number"))?;
        let fullmove_number = fields[5]
            .parse::<u32>()
            .map_err(|_| malformed("fullmove number is not a number"))?;

        Ok(Board::from_parts(
            squares,
            side_to_move,
            castle_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.fen())
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fen = <String as serde::Deserialize>::deserialize(deserializer)?;
        Board::from_str(&fen).map_err(serde::de::Error::custom)
    }
}
