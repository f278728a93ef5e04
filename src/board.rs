//! Board state: placed blocks plus a derived occupancy grid.
//!
//! The grid is a flat row-major array where each cell holds the occupying
//! block's shape id (1-4) or 0 for empty. It is a cache over the block list
//! and is only ever touched through the board's mutation methods, so the two
//! representations cannot diverge.

use thiserror::Error;

use crate::blocks::{
    BlockShape, Move, PlacedBlock, Position, GRID_CELLS, NUM_COLS, NUM_ROWS, WINNING_POSITION,
};

/// Flat row-major occupancy array; cell = shape id or 0.
pub type Grid = [u8; GRID_CELLS];

/// Converts (row, col) coordinates to a linear cell index.
#[inline(always)]
pub const fn cell_index(row: i32, col: i32) -> usize {
    (row as usize) * NUM_COLS + (col as usize)
}

/// Precondition violations raised by board operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The block would leave the board or overlap an existing block.
    #[error("cannot place {shape} block at {position}: out of bounds or overlapping")]
    InvalidPlacement {
        shape: BlockShape,
        position: Position,
    },
    /// No block with this exact shape and position is on the board.
    #[error("no {shape} block at {position}")]
    BlockNotFound {
        shape: BlockShape,
        position: Position,
    },
    /// `is_solved` needs exactly one 2x2 block to exist.
    #[error("board does not contain exactly one 2x2 block")]
    MissingRequiredBlock,
}

/// A Klotski board: ordered placed blocks and their occupancy grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    blocks: Vec<PlacedBlock>,
    grid: Grid,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board {
            blocks: Vec::new(),
            grid: [0; GRID_CELLS],
        }
    }

    /// Builds a board by adding every block in order.
    pub fn from_blocks(blocks: &[PlacedBlock]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for &block in blocks {
            board.add_block(block)?;
        }
        Ok(board)
    }

    /// The placed blocks, in insertion order.
    pub fn blocks(&self) -> &[PlacedBlock] {
        &self.blocks
    }

    /// The occupancy grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of occupied cells.
    pub fn filled_cells(&self) -> usize {
        self.grid.iter().filter(|&&cell| cell != 0).count()
    }

    /// Adds a block, marking its footprint with the shape id.
    ///
    /// Fails if any footprint cell is out of bounds or already occupied.
    pub fn add_block(&mut self, block: PlacedBlock) -> Result<(), BoardError> {
        let blocked = !block.in_bounds()
            || block
                .cells()
                .any(|cell| self.grid[cell_index(cell.row, cell.col)] != 0);
        if blocked {
            return Err(BoardError::InvalidPlacement {
                shape: block.shape,
                position: block.position,
            });
        }
        self.blocks.push(block);
        self.mark(block, block.shape.id());
        Ok(())
    }

    /// Removes the block matching `block` exactly and clears its footprint.
    pub fn remove_block(&mut self, block: PlacedBlock) -> Result<(), BoardError> {
        let index = self.find(block)?;
        self.blocks.remove(index);
        self.mark(block, 0);
        Ok(())
    }

    /// Relocates the block matching `block` exactly to `destination`.
    ///
    /// The destination is not checked for occupancy; the move generator and
    /// solver only ever request legal slides.
    pub fn move_block(
        &mut self,
        block: PlacedBlock,
        destination: Position,
    ) -> Result<(), BoardError> {
        let index = self.find(block)?;
        let moved = PlacedBlock::new(block.shape, destination);
        debug_assert!(moved.in_bounds(), "destination {destination} out of bounds");
        self.mark(block, 0);
        self.blocks[index] = moved;
        self.mark(moved, moved.shape.id());
        Ok(())
    }

    /// Applies a generated move: relocates its block to the move destination.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), BoardError> {
        self.move_block(mv.block(), mv.destination())
    }

    /// Whether the board is a complete puzzle: exactly one 2x2 block and
    /// exactly two empty cells.
    pub fn is_valid(&self) -> bool {
        let squares = self
            .blocks
            .iter()
            .filter(|block| block.shape == BlockShape::Square)
            .count();
        squares == 1 && self.filled_cells() == GRID_CELLS - 2
    }

    /// Whether the unique 2x2 block sits on the winning position.
    ///
    /// Fails unless exactly one 2x2 block exists.
    pub fn is_solved(&self) -> Result<bool, BoardError> {
        let mut squares = self
            .blocks
            .iter()
            .filter(|block| block.shape == BlockShape::Square);
        match (squares.next(), squares.next()) {
            (Some(square), None) => Ok(square.position == WINNING_POSITION),
            _ => Err(BoardError::MissingRequiredBlock),
        }
    }

    /// Renders the grid as one digit row per line, `.` for empty cells.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(GRID_CELLS + NUM_ROWS);
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let cell = self.grid[row * NUM_COLS + col];
                output.push(if cell == 0 {
                    '.'
                } else {
                    char::from(b'0' + cell)
                });
            }
            output.push('\n');
        }
        output
    }

    fn find(&self, block: PlacedBlock) -> Result<usize, BoardError> {
        self.blocks
            .iter()
            .position(|&candidate| candidate == block)
            .ok_or(BoardError::BlockNotFound {
                shape: block.shape,
                position: block.position,
            })
    }

    fn mark(&mut self, block: PlacedBlock, value: u8) {
        for cell in block.cells() {
            self.grid[cell_index(cell.row, cell.col)] = value;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
