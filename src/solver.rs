//! Breadth-first solver over board states.
//!
//! States are deduplicated by their exact grid occupancy array in an
//! `FxHashSet`, so two boards compare equal exactly when every cell holds the
//! same shape id. No lossy digest is involved and false merges cannot occur.
//!
//! BFS expands states in nondecreasing move-count order, so the first solved
//! state dequeued is reachable in a minimum number of moves.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::blocks::Move;
use crate::board::{Board, Grid};
use crate::moves;

/// Visited-set key: the exact row-major grid occupancy.
type StateKey = Grid;

/// Result of a bounded solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Minimum-length move sequence from the input board to a solved board.
    /// Empty when the input was already solved.
    Solved(Vec<Move>),
    /// The whole reachable state space was explored without a solved state.
    Unsolvable,
    /// The expansion budget ran out before the search could finish.
    BudgetExhausted,
}

/// One explored state: a board, the move that produced it, and its parent.
///
/// Nodes live in a flat arena for the duration of one solve call; parents are
/// arena indices, walked backwards to reconstruct the winning path.
struct SearchNode {
    board: Board,
    parent: Option<usize>,
    via: Option<Move>,
}

/// Finds a minimum-length solution, or proves there is none.
///
/// `None` means the puzzle is unsolvable; `Some(vec![])` means the input was
/// already solved. The caller is expected to pass a board satisfying
/// [`Board::is_valid`]; the solver searches whatever state graph the input
/// implies.
pub fn solve(board: &Board) -> Option<Vec<Move>> {
    match solve_bounded(board, usize::MAX) {
        SolveOutcome::Solved(moves) => Some(moves),
        _ => None,
    }
}

/// BFS with an explicit budget on expanded states.
///
/// An unsolvable board has no termination guarantee other than exhausting the
/// reachable state space, so long-running callers can bound the work and
/// observe [`SolveOutcome::BudgetExhausted`] instead of blocking.
pub fn solve_bounded(board: &Board, max_expansions: usize) -> SolveOutcome {
    let mut visited: FxHashSet<StateKey> = FxHashSet::default();
    visited.insert(*board.grid());

    let mut nodes = vec![SearchNode {
        board: board.clone(),
        parent: None,
        via: None,
    }];
    let mut frontier: VecDeque<usize> = VecDeque::from([0]);
    let mut expanded = 0usize;

    while let Some(index) = frontier.pop_front() {
        if nodes[index].board.is_solved().unwrap_or(false) {
            let path = collect_path(&nodes, index);
            log::debug!(
                "solved in {} moves after expanding {} of {} discovered states",
                path.len(),
                expanded,
                nodes.len()
            );
            return SolveOutcome::Solved(path);
        }

        if expanded >= max_expansions {
            log::debug!("expansion budget of {max_expansions} exhausted");
            return SolveOutcome::BudgetExhausted;
        }
        expanded += 1;

        for mv in moves::legal_moves(&nodes[index].board) {
            let mut child = nodes[index].board.clone();
            if child.apply_move(&mv).is_err() {
                // legal_moves only names blocks present on this board
                continue;
            }
            if visited.insert(*child.grid()) {
                nodes.push(SearchNode {
                    board: child,
                    parent: Some(index),
                    via: Some(mv),
                });
                frontier.push_back(nodes.len() - 1);
            }
        }
    }

    log::debug!("explored {} states without reaching the goal", nodes.len());
    SolveOutcome::Unsolvable
}

/// Walks parent links from a solved node back to the root, returning the
/// originating moves in root-to-solution order.
fn collect_path(nodes: &[SearchNode], mut index: usize) -> Vec<Move> {
    let mut path = Vec::new();
    while let (Some(mv), Some(parent)) = (nodes[index].via, nodes[index].parent) {
        path.push(mv);
        index = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockShape, PlacedBlock, Position, CLASSIC_LAYOUT};

    fn board(blocks: &[(BlockShape, i32, i32)]) -> Board {
        let placed: Vec<PlacedBlock> = blocks
            .iter()
            .map(|&(shape, row, col)| PlacedBlock::new(shape, Position::new(row, col)))
            .collect();
        Board::from_blocks(&placed).unwrap()
    }

    /// Replays a solution and asserts it actually solves the board.
    fn assert_solves(start: &Board, solution: &[Move]) {
        let mut replay = start.clone();
        for mv in solution {
            replay.apply_move(mv).unwrap();
        }
        assert_eq!(replay.is_solved(), Ok(true));
    }

    #[test]
    fn test_one_move_from_the_goal() {
        use BlockShape::*;
        let start = board(&[
            (Tall, 0, 0),
            (Tall, 0, 1),
            (Tall, 0, 2),
            (Tall, 0, 3),
            (Tall, 2, 0),
            (Square, 2, 1),
            (Tall, 2, 3),
            (Single, 4, 0),
            (Single, 4, 3),
        ]);
        assert!(start.is_valid());

        let solution = solve(&start).unwrap();
        assert_eq!(solution.len(), 1);
        assert_solves(&start, &solution);
    }

    #[test]
    fn test_classic_layout_takes_81_moves() {
        let start = Board::from_blocks(CLASSIC_LAYOUT).unwrap();
        let solution = solve(&start).unwrap();
        assert_eq!(solution.len(), 81);
        assert_solves(&start, &solution);
    }

    #[test]
    fn test_already_solved_board_yields_empty_solution() {
        use BlockShape::*;
        let start = board(&[
            (Tall, 0, 0),
            (Tall, 0, 1),
            (Tall, 0, 2),
            (Tall, 0, 3),
            (Tall, 2, 0),
            (Wide, 2, 1),
            (Tall, 2, 3),
            (Square, 3, 1),
        ]);
        assert_eq!(start.is_solved(), Ok(true));
        assert_eq!(solve(&start), Some(Vec::new()));
    }

    #[test]
    fn test_unsolvable_board_returns_none() {
        use BlockShape::*;
        let start = board(&[
            (Tall, 0, 0),
            (Square, 0, 1),
            (Tall, 0, 3),
            (Tall, 2, 0),
            (Wide, 2, 1),
            (Tall, 2, 3),
            (Wide, 3, 1),
            (Single, 4, 0),
            (Single, 4, 3),
        ]);
        assert!(start.is_valid());
        assert_eq!(solve(&start), None);
    }

    #[test]
    fn test_hard_ten_block_layout_takes_120_moves() {
        use BlockShape::*;
        let start = board(&[
            (Single, 0, 0),
            (Square, 0, 1),
            (Single, 0, 3),
            (Tall, 1, 0),
            (Tall, 1, 3),
            (Wide, 2, 1),
            (Single, 3, 0),
            (Wide, 3, 1),
            (Single, 3, 3),
            (Wide, 4, 1),
        ]);
        assert!(start.is_valid());

        let solution = solve(&start).unwrap();
        assert_eq!(solution.len(), 120);
        assert_solves(&start, &solution);
    }

    #[test]
    fn test_budget_exhaustion_is_reported() {
        let start = Board::from_blocks(CLASSIC_LAYOUT).unwrap();
        assert_eq!(solve_bounded(&start, 1), SolveOutcome::BudgetExhausted);
    }

    #[test]
    fn test_solved_board_beats_a_zero_budget() {
        let start = board(&[(BlockShape::Square, 3, 1)]);
        assert_eq!(solve_bounded(&start, 0), SolveOutcome::Solved(Vec::new()));
    }

    #[test]
    fn test_no_shorter_solution_than_bfs_result() {
        // the one-move fixture cannot be solved in zero moves
        use BlockShape::*;
        let start = board(&[
            (Tall, 0, 0),
            (Tall, 0, 1),
            (Tall, 0, 2),
            (Tall, 0, 3),
            (Tall, 2, 0),
            (Square, 2, 1),
            (Tall, 2, 3),
            (Single, 4, 0),
            (Single, 4, 3),
        ]);
        assert_eq!(start.is_solved(), Ok(false));
        assert_eq!(solve(&start).map(|s| s.len()), Some(1));
    }
}
