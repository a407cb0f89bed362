use crate::board::Board;
use crate::error::Error;
use crate::movegen::MoveGen;
use log::debug;
use std::collections::BTreeMap;

/// Count the leaf nodes of the legal move tree `depth` plies deep.
///
/// Depth 0 counts the position itself, so it is always 1.
///
/// ```
/// use chessline::{perft, Board};
///
/// assert_eq!(perft(&Board::default(), 0).unwrap(), 1);
/// assert_eq!(perft(&Board::default(), 2).unwrap(), 400);
/// ```
pub fn perft(board: &Board, depth: u32) -> Result<u64, Error> {
    if depth == 0 {
        return Ok(1);
    }

    let iterable = MoveGen::new_legal(board)?;
    if depth == 1 {
        return Ok(iterable.len() as u64);
    }

    let mut result = 0;
    for m in iterable {
        result += perft(&board.make_move_new(m)?, depth - 1)?;
    }
    Ok(result)
}

/// Perft split by root move: each legal move's coordinate notation, mapped to the size of its
/// subtree.  The counts add up to `perft(board, depth)`.
pub fn perft_divide(board: &Board, depth: u32) -> Result<BTreeMap<String, u64>, Error> {
    if depth == 0 {
        return Err(Error::InvalidDepth);
    }

    let mut result = BTreeMap::new();
    for m in MoveGen::new_legal(board)? {
        let count = perft(&board.make_move_new(m)?, depth - 1)?;
        debug!("{}: {}", m, count);
        result.insert(m.to_string(), count);
    }
    Ok(result)
}

/// Lay out a divided perft the way the usual reference engines print it: one `move: count`
/// line per root move, a blank line, then the total.
///
/// ```
/// use chessline::{format_divide, perft_divide, Board};
///
/// let board: Board = "4k3/8/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
/// let divided = perft_divide(&board, 1).unwrap();
/// let text = format_divide(&divided);
/// assert!(text.starts_with("e1d1: 1\n"));
/// assert!(text.ends_with("\nNodes searched: 15\n"));
/// ```
pub fn format_divide(divided: &BTreeMap<String, u64>) -> String {
    let mut s = String::new();
    for (m, count) in divided.iter() {
        s.push_str(&format!("{}: {}\n", m, count));
    }
    s.push_str(&format!("\nNodes searched: {}\n", divided.values().sum::<u64>()));
    s
}

/// The legal moves of the position in coordinate notation, sorted.
pub fn legal_move_strings(board: &Board) -> Result<Vec<String>, Error> {
    let mut moves: Vec<String> = MoveGen::new_legal(board)?.map(|m| m.to_string()).collect();
    moves.sort();
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::STARTING_FEN;
    use std::str::FromStr;

    fn perft_test(fen: &str, depth: u32, result: u64) {
        let board = Board::from_str(fen).expect("valid fen");
        assert_eq!(perft(&board, depth).unwrap(), result, "{}", fen);
    }

    #[test]
    fn perft_start() {
        perft_test(STARTING_FEN, 1, 20);
        perft_test(STARTING_FEN, 2, 400);
        perft_test(STARTING_FEN, 3, 8902);
        perft_test(STARTING_FEN, 4, 197281);
    }

    #[test]
    fn perft_kiwipete() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        perft_test(fen, 1, 48);
        perft_test(fen, 2, 2039);
        perft_test(fen, 3, 97862);
    }

    #[test]
    fn perft_kiwipete_with_zero_fullmove() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0";
        perft_test(fen, 1, 48);
        perft_test(fen, 2, 2039);
    }

    #[test]
    fn perft_endgame_rooks() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        perft_test(fen, 1, 14);
        perft_test(fen, 2, 191);
        perft_test(fen, 3, 2812);
        perft_test(fen, 4, 43238);
    }

    #[test]
    fn perft_promotions_and_castling() {
        let fen = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
        perft_test(fen, 1, 6);
        perft_test(fen, 2, 264);
        perft_test(fen, 3, 9467);
    }

    #[test]
    fn perft_discovered_promotion() {
        let fen = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
        perft_test(fen, 1, 44);
        perft_test(fen, 2, 1486);
        perft_test(fen, 3, 62379);
    }

    #[test]
    fn perft_en_passant_pins() {
        perft_test("8/5bk1/8/2Pp4/8/1K6/8/8 w - d6 0 1", 6, 824064);
        perft_test("8/8/1k6/8/2pP4/8/5BK1/8 b - d3 0 1", 6, 824064);
        perft_test("8/8/1k6/2b5/2pP4/8/5K2/8 b - d3 0 1", 6, 1440467);
        perft_test("8/5k2/8/2Pp4/2B5/1K6/8/8 w - d6 0 1", 6, 1440467);
    }

    #[test]
    fn perft_castling_rights() {
        perft_test("5k2/8/8/8/8/8/8/4K2R w K - 0 1", 6, 661072);
        perft_test("4k2r/8/8/8/8/8/8/5K2 b k - 0 1", 6, 661072);
        perft_test("3k4/8/8/8/8/8/8/R3K3 w Q - 0 1", 6, 803711);
        perft_test("r3k3/8/8/8/8/8/8/3K4 b q - 0 1", 6, 803711);
    }

    #[test]
    fn perft_castling_under_fire() {
        perft_test("r3k2r/1b4bq/8/8/8/8/7B/R3K2R w KQkq - 0 1", 4, 1274206);
        perft_test("r3k2r/7b/8/8/8/8/1B4BQ/R3K2R b KQkq - 0 1", 4, 1274206);
        perft_test("r3k2r/8/3Q4/8/8/5q2/8/R3K2R b KQkq - 0 1", 4, 1720476);
        perft_test("r3k2r/8/5Q2/8/8/3q4/8/R3K2R w KQkq - 0 1", 4, 1720476);
    }

    #[test]
    fn perft_promotion_races() {
        perft_test("2K2r2/4P3/8/8/8/8/8/3k4 w - - 0 1", 6, 3821001);
        perft_test("3K4/8/8/8/8/8/4p3/2k2R2 b - - 0 1", 6, 3821001);
        perft_test("8/8/1P2K3/8/2n5/1q6/8/5k2 b - - 0 1", 5, 1004658);
        perft_test("5K2/8/1Q6/2N5/8/1p2k3/8/8 w - - 0 1", 5, 1004658);
        perft_test("4k3/1P6/8/8/8/8/K7/8 w - - 0 1", 6, 217342);
        perft_test("8/k7/8/8/8/8/1p6/4K3 b - - 0 1", 6, 217342);
    }

    #[test]
    fn perft_stalemate_and_checkmate() {
        perft_test("8/P1k5/K7/8/8/8/8/8 w - - 0 1", 6, 92683);
        perft_test("8/8/8/8/8/k7/p1K5/8 b - - 0 1", 6, 92683);
        perft_test("K1k5/8/P7/8/8/8/8/8 w - - 0 1", 6, 2217);
        perft_test("8/8/8/8/8/p7/8/k1K5 b - - 0 1", 6, 2217);
        perft_test("8/k1P5/8/1K6/8/8/8/8 w - - 0 1", 7, 567584);
        perft_test("8/8/8/8/1k6/8/K1p5/8 b - - 0 1", 7, 567584);
        perft_test("8/8/2k5/5q2/5n2/8/5K2/8 b - - 0 1", 4, 23527);
        perft_test("8/5k2/8/5N2/5Q2/2K5/8/8 w - - 0 1", 4, 23527);
    }

    #[test]
    fn divide_adds_up() {
        let board = Board::default();
        let divided = perft_divide(&board, 3).unwrap();
        assert_eq!(divided.len(), 20);
        assert_eq!(divided["e2e4"], 600);
        assert_eq!(divided["g1f3"], 440);
        assert_eq!(divided.values().sum::<u64>(), perft(&board, 3).unwrap());
    }

    #[test]
    fn divide_needs_a_ply() {
        assert_eq!(perft_divide(&Board::default(), 0), Err(Error::InvalidDepth));
    }

    #[test]
    fn divide_text_layout() {
        let board = Board::from_str("7k/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let text = format_divide(&perft_divide(&board, 1).unwrap());
        assert_eq!(text, "a1a2: 1\na1b1: 1\na1b2: 1\n\nNodes searched: 3\n");
    }

    #[test]
    fn no_moves_at_mate() {
        let mated = Board::from_str("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        assert_eq!(perft(&mated, 3).unwrap(), 0);
        assert!(legal_move_strings(&mated).unwrap().is_empty());
        assert_eq!(
            legal_move_strings(&Board::default()).unwrap()[..3],
            ["a2a3", "a2a4", "b1a3"]
        );
    }
}
