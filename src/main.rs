use chessline::{
    format_divide, legal_sans, perft, perft_divide, Board, BoardStatus, Error, STARTING_FEN,
};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::process;
use std::str::FromStr;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "chessline")]
#[command(about = "Inspect chess positions, list legal moves and run perft")]
struct Args {
    /// FEN of the position to start from
    #[arg(short, long, default_value = STARTING_FEN)]
    fen: String,

    /// Comma separated coordinate moves (e2e4,e7e5) to play before running the command
    #[arg(short, long, value_delimiter = ',')]
    moves: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count the leaf nodes of the legal move tree
    Perft {
        /// Number of plies to search
        #[arg(short, long, default_value_t = 1)]
        depth: u32,

        /// Print the count under each root move, like a reference engine's `go perft`
        #[arg(long)]
        divide: bool,
    },
    /// List every legal move in coordinate notation and SAN
    Moves,
    /// Print the FEN and a diagram of the position
    Show,
}

fn run(args: Args) -> Result<(), Error> {
    let mut board = Board::from_str(&args.fen)?;
    for uci in args.moves.iter() {
        board = board.apply_uci(uci)?;
    }

    match args.command {
        Command::Perft { depth, divide } => {
            let start = Instant::now();
            if divide {
                print!("{}", format_divide(&perft_divide(&board, depth)?));
            } else {
                println!("{}", perft(&board, depth)?);
            }
            info!("perft {} took {:?}", depth, start.elapsed());
        }
        Command::Moves => {
            for (m, san) in legal_sans(&board)? {
                println!("{} {}", m, san);
            }
        }
        Command::Show => {
            println!("{}", board.fen());
            print!("{}", board.diagram());
            let in_check = board.in_check()?;
            match board.status()? {
                BoardStatus::Ongoing if in_check => println!("Check"),
                BoardStatus::Ongoing => {}
                BoardStatus::Checkmate => println!("Checkmate"),
                BoardStatus::Stalemate => println!("Stalemate"),
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
