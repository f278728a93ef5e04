//! Klotski Puzzle Engine
//!
//! Models the 5x4 sliding-block puzzle: rectangular blocks of four fixed
//! shapes slide orthogonally into empty cells until the 2x2 block reaches the
//! winning position. Provides board mutation with precondition checks,
//! legal-move enumeration, a breadth-first solver that returns minimum-length
//! solutions, and a random generator that uses the solver as a solvability
//! oracle.

pub mod blocks;
pub mod board;
pub mod generator;
pub mod moves;
pub mod solver;

pub use blocks::{
    BlockShape, Direction, Move, PlacedBlock, Position, CLASSIC_LAYOUT, GRID_CELLS, NUM_COLS,
    NUM_ROWS, WINNING_POSITION,
};
pub use board::{Board, BoardError};
pub use generator::{random_solvable_board, random_solvable_board_with};
pub use moves::{destinations, legal_moves, legal_moves_for};
pub use solver::{solve, solve_bounded, SolveOutcome};
