#[macro_use]
extern crate bencher;

use bencher::Bencher;
use chessline::{perft, to_san, Board, ChessMove, Color, MoveGen, Square};
use std::str::FromStr;

const MIDDLEGAME_FEN: &str = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1 b kq - 1 7";

// This is a helper function to remove boilerplate code from all the perft_* benchmarks
fn board_perft(bench: &mut Bencher, fen: &str, depth: u32, count: u64) {
    let pos = Board::from_str(fen).expect("Valid FEN");

    bench.iter(|| assert_eq!(perft(&pos, depth).expect("legal position"), count));
}

fn perft_kiwipete(bench: &mut Bencher) {
    board_perft(
        bench,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        2,
        2039,
    );
}

fn perft_start(bench: &mut Bencher) {
    board_perft(bench, chessline::STARTING_FEN, 3, 8902);
}

fn board_legal_moves(bench: &mut Bencher) {
    let pos = Board::from_str(MIDDLEGAME_FEN).expect("valid fen");
    bench.iter(|| {
        assert_eq!(MoveGen::new_legal(&pos).expect("legal position").len(), 39);
    });
}

fn board_make_move(bench: &mut Bencher) {
    let pos = Board::from_str(MIDDLEGAME_FEN).expect("valid fen");
    let m = ChessMove::new(Square::F8, Square::E7, None);
    bench.iter(|| {
        let after = pos.make_move_new(m).expect("black to move");
        assert_eq!(after.side_to_move(), Color::White);
    });
}

fn board_san(bench: &mut Bencher) {
    let pos = Board::from_str(MIDDLEGAME_FEN).expect("valid fen");
    let m = ChessMove::new(Square::D5, Square::C3, None);
    bench.iter(|| {
        assert_eq!(to_san(&pos, m).expect("legal move"), "Nxc3");
    });
}

benchmark_group!(
    benches,
    perft_kiwipete,
    perft_start,
    board_legal_moves,
    board_make_move,
    board_san
);
benchmark_main!(benches);
