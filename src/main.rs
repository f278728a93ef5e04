//! Klotski command line driver.
//!
//! Solves the classic starting layout, generates random solvable boards, and
//! lists legal moves, printing boards as digit grids (cell = shape id, `.` =
//! empty).

use std::error::Error;

use clap::{Parser, Subcommand};
use flexi_logger::Logger;

use klotski::{generator, moves, solver, Board, CLASSIC_LAYOUT};

/// Solves and generates 5x4 Klotski sliding-block puzzles.
#[derive(Parser)]
#[command(name = "klotski")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the classic layout and print the minimum move sequence.
    Solve,
    /// Generate a random solvable board.
    Random,
    /// List every legal move on the classic layout.
    Moves,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?
        .log_to_stderr()
        .start()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Solve) | None => run_solve()?,
        Some(Command::Random) => run_random(),
        Some(Command::Moves) => run_moves()?,
    }
    Ok(())
}

/// Solves the classic layout and prints the numbered move list.
fn run_solve() -> Result<(), Box<dyn Error>> {
    let board = Board::from_blocks(CLASSIC_LAYOUT)?;
    print!("{}", board.render());

    match solver::solve(&board) {
        Some(solution) => {
            println!("Solved in {} moves:", solution.len());
            for (i, mv) in solution.iter().enumerate() {
                println!("{:3}. {mv}", i + 1);
            }
        }
        None => println!("No solution exists"),
    }
    Ok(())
}

/// Generates a random solvable board and reports its solution length.
fn run_random() {
    let board = generator::random_solvable_board();
    print!("{}", board.render());

    // the generator only returns solvable, not-yet-solved boards
    if let Some(solution) = solver::solve(&board) {
        println!("Solvable in {} moves", solution.len());
    }
}

/// Prints every legal move on the classic layout.
fn run_moves() -> Result<(), Box<dyn Error>> {
    let board = Board::from_blocks(CLASSIC_LAYOUT)?;
    print!("{}", board.render());

    let legal = moves::legal_moves(&board);
    println!("{} legal moves:", legal.len());
    for mv in &legal {
        println!("  {mv}");
    }
    Ok(())
}
