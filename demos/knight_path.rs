//! Shortest knight path between two squares.
//!
//! Run: cargo run --bin knight-path -- 0-0 7-7 --size 8

use clap::Parser;
use knight_core::Board;
use knight_demos::{parse_square, report};
use knight_paths::ReachabilityIndex;

#[derive(Parser, Debug)]
#[command(version, about = "Shortest sequence of knight moves between two squares")]
struct Args {
    /// Starting square as x-y
    start: String,
    /// Destination square as x-y
    end: String,
    /// Side length of the board
    #[arg(short, long, default_value_t = Board::DEFAULT_SIZE)]
    size: i32,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let board = Board::try_from(args.size)?;
    let start = parse_square(&args.start, board)?;
    let end = parse_square(&args.end, board)?;
    log::info!("knight path {start} -> {end} on {board} board");

    let index = ReachabilityIndex::build(start, board)?;
    println!("{}", report(&index, end)?);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
