//! Legal-move enumeration for sliding blocks.
//!
//! A turn moves one block by one or two unit steps into empty cells. The
//! generator never mutates the board: a step is checked by testing the
//! hypothetical footprint at the shifted position against the current grid,
//! with the moving block's own cells counted as free.

use crate::blocks::{Direction, Move, PlacedBlock, Position};
use crate::board::{cell_index, Board, Grid};

/// Every legal move for every block on the board.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .blocks()
        .iter()
        .flat_map(|block| legal_moves_for(board, block))
        .collect()
}

/// Every legal 1- or 2-step move for one block.
///
/// Two-step moves never reverse their first step, and duplicate moves are
/// suppressed within the result.
pub fn legal_moves_for(board: &Board, block: &PlacedBlock) -> Vec<Move> {
    let mut moves = Vec::new();
    for first in Direction::ALL {
        let shifted = block.position.shifted(first);
        if !can_occupy(board.grid(), *block, shifted) {
            continue;
        }
        push_unique(&mut moves, Move::single(block.shape, block.position, first));

        for second in Direction::ALL {
            if second == first.opposite() {
                continue;
            }
            let landing = shifted.shifted(second);
            if can_occupy(board.grid(), *block, landing) {
                push_unique(
                    &mut moves,
                    Move::double(block.shape, block.position, first, second),
                );
            }
        }
    }
    moves
}

/// Top-left positions the block can reach this turn, for highlighting.
pub fn destinations(board: &Board, block: &PlacedBlock) -> Vec<Position> {
    let mut positions = Vec::new();
    for mv in legal_moves_for(board, block) {
        let destination = mv.destination();
        if !positions.contains(&destination) {
            positions.push(destination);
        }
    }
    positions
}

/// Whether `block` could sit at `target` on this grid.
///
/// Every footprint cell at `target` must be inside the board and either empty
/// or covered by the block's own current footprint.
fn can_occupy(grid: &Grid, block: PlacedBlock, target: Position) -> bool {
    let moved = PlacedBlock::new(block.shape, target);
    moved.in_bounds()
        && moved
            .cells()
            .all(|cell| grid[cell_index(cell.row, cell.col)] == 0 || block.covers(cell))
}

fn push_unique(moves: &mut Vec<Move>, mv: Move) {
    if !moves.contains(&mv) {
        moves.push(mv);
    }
}
