//! Random solvable-board generation.
//!
//! Boards are assembled by random placement under a cell budget, then checked
//! against the solver: candidates that are unsolvable or already solved are
//! thrown away and generation restarts from an empty board.

use rand::Rng;

use crate::blocks::{
    BlockShape, PlacedBlock, Position, GRID_CELLS, NUM_COLS, NUM_ROWS, WINNING_POSITION,
};
use crate::board::Board;
use crate::solver;

/// Generates a random board that is valid, solvable, and not already solved.
///
/// Blocking: every candidate is run through the breadth-first solver.
pub fn random_solvable_board() -> Board {
    random_solvable_board_with(&mut rand::rng())
}

/// Seedable variant of [`random_solvable_board`].
pub fn random_solvable_board_with<R: Rng>(rng: &mut R) -> Board {
    let mut candidates = 0u32;
    loop {
        candidates += 1;
        let board = random_board(rng);
        match solver::solve(&board) {
            Some(solution) if !solution.is_empty() => {
                log::debug!(
                    "accepted candidate {candidates}, solvable in {} moves",
                    solution.len()
                );
                return board;
            }
            Some(_) => log::debug!("candidate {candidates} already solved, retrying"),
            None => log::debug!("candidate {candidates} unsolvable, retrying"),
        }
    }
}

/// Fills an empty board with random blocks until exactly two cells are free.
///
/// The 2x2 block is placed first, never on the winning footprint, so a fresh
/// board cannot come out pre-solved. The result always satisfies
/// [`Board::is_valid`] but may be unsolvable.
pub fn random_board<R: Rng>(rng: &mut R) -> Board {
    let mut board = Board::new();
    let mut cells_available = GRID_CELLS - 2;
    let mut has_square = false;

    while cells_available > 0 {
        let shape = if !has_square {
            BlockShape::Square
        } else if cells_available == 1 {
            BlockShape::Single
        } else {
            [BlockShape::Single, BlockShape::Tall, BlockShape::Wide][rng.random_range(0..3)]
        };
        let position = Position::new(
            rng.random_range(0..NUM_ROWS as i32),
            rng.random_range(0..NUM_COLS as i32),
        );
        if !has_square && winning_footprint_covers(position) {
            continue;
        }
        if board.add_block(PlacedBlock::new(shape, position)).is_ok() {
            cells_available -= shape.area();
            has_square |= shape == BlockShape::Square;
        }
    }

    debug_assert!(board.is_valid());
    board
}

/// Whether a top-left candidate falls on a cell the winning 2x2 would cover.
fn winning_footprint_covers(position: Position) -> bool {
    PlacedBlock::new(BlockShape::Square, WINNING_POSITION).covers(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_board_is_a_valid_puzzle() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let board = random_board(&mut rng);
            assert!(board.is_valid());
            assert_eq!(board.filled_cells(), GRID_CELLS - 2);
        }
    }

    #[test]
    fn test_square_never_starts_on_winning_footprint() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let board = random_board(&mut rng);
            let square = board
                .blocks()
                .iter()
                .find(|block| block.shape == BlockShape::Square)
                .copied()
                .unwrap();
            assert!(!winning_footprint_covers(square.position));
            assert_eq!(board.is_solved(), Ok(false));
        }
    }

    #[test]
    fn test_generated_boards_are_solvable_but_not_solved() {
        for seed in [1, 42] {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = random_solvable_board_with(&mut rng);
            assert!(board.is_valid());
            let solution = solver::solve(&board).unwrap();
            assert!(!solution.is_empty());
        }
    }
}
