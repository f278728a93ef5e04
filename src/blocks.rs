//! Block shapes, grid coordinates, and move definitions.
//!
//! All four Klotski block shapes are axis-aligned rectangles spanning one or
//! two cells per axis. Shapes carry a stable 1-based id that doubles as the
//! occupancy value written into the grid.

use std::fmt;

/// Board height in cells.
pub const NUM_ROWS: usize = 5;
/// Board width in cells.
pub const NUM_COLS: usize = 4;
/// Total cell count of the board.
pub const GRID_CELLS: usize = NUM_ROWS * NUM_COLS;

/// Top-left cell the 2x2 block must reach to solve the puzzle.
pub const WINNING_POSITION: Position = Position::new(3, 1);

/// The four block shapes, named by their footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockShape {
    /// 1x1.
    Single,
    /// 2 rows x 1 column.
    Tall,
    /// 1 row x 2 columns.
    Wide,
    /// 2x2, the block that has to escape.
    Square,
}

impl BlockShape {
    /// All shapes in id order.
    pub const ALL: [BlockShape; 4] = [
        BlockShape::Single,
        BlockShape::Tall,
        BlockShape::Wide,
        BlockShape::Square,
    ];

    /// Rows spanned by the footprint.
    #[inline]
    pub const fn rows(self) -> i32 {
        match self {
            BlockShape::Single | BlockShape::Wide => 1,
            BlockShape::Tall | BlockShape::Square => 2,
        }
    }

    /// Columns spanned by the footprint.
    #[inline]
    pub const fn cols(self) -> i32 {
        match self {
            BlockShape::Single | BlockShape::Tall => 1,
            BlockShape::Wide | BlockShape::Square => 2,
        }
    }

    /// Number of cells covered.
    #[inline]
    pub const fn area(self) -> usize {
        (self.rows() * self.cols()) as usize
    }

    /// Stable 1-based id, assigned by `(rows, cols)` in a fixed order.
    ///
    /// Also the value written into occupied grid cells.
    #[inline]
    pub const fn id(self) -> u8 {
        match self {
            BlockShape::Single => 1,
            BlockShape::Tall => 2,
            BlockShape::Wide => 3,
            BlockShape::Square => 4,
        }
    }

    /// Inverse of [`BlockShape::id`].
    pub const fn from_id(id: u8) -> Option<BlockShape> {
        match id {
            1 => Some(BlockShape::Single),
            2 => Some(BlockShape::Tall),
            3 => Some(BlockShape::Wide),
            4 => Some(BlockShape::Square),
            _ => None,
        }
    }

    /// Next shape in the fixed cycle 1x1 -> 2x1 -> 1x2 -> 2x2 -> 1x1.
    ///
    /// Used by editors that let the user tap a block through its shapes.
    pub const fn cycled(self) -> BlockShape {
        match self {
            BlockShape::Single => BlockShape::Tall,
            BlockShape::Tall => BlockShape::Wide,
            BlockShape::Wide => BlockShape::Square,
            BlockShape::Square => BlockShape::Single,
        }
    }
}

impl fmt::Display for BlockShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows(), self.cols())
    }
}

/// A zero-indexed grid coordinate; row grows downward, col rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// The adjacent position one step in `direction`.
    #[inline]
    pub const fn shifted(self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit slide direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column offset of one step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// A block placed on the board, identified by shape and top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlacedBlock {
    pub shape: BlockShape,
    pub position: Position,
}

impl PlacedBlock {
    pub const fn new(shape: BlockShape, position: Position) -> Self {
        PlacedBlock { shape, position }
    }

    /// Whether the whole footprint lies inside the board.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.position.row >= 0
            && self.position.col >= 0
            && self.position.row + self.shape.rows() <= NUM_ROWS as i32
            && self.position.col + self.shape.cols() <= NUM_COLS as i32
    }

    /// Whether `cell` lies inside this block's footprint.
    #[inline]
    pub const fn covers(self, cell: Position) -> bool {
        cell.row >= self.position.row
            && cell.row < self.position.row + self.shape.rows()
            && cell.col >= self.position.col
            && cell.col < self.position.col + self.shape.cols()
    }

    /// Every cell of the footprint, row-major.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let origin = self.position;
        let cols = self.shape.cols();
        (0..self.shape.rows())
            .flat_map(move |dr| (0..cols).map(move |dc| Position::new(origin.row + dr, origin.col + dc)))
    }
}

/// One puzzle turn: a block sliding one or two unit steps.
///
/// The block is identified by its shape and position *before* the move. A
/// two-step move slides through an intermediate free cell in a single turn;
/// its second step is never the reverse of the first.
///
/// Uses a fixed-size step array to stay `Copy`; a one-step move repeats its
/// direction in the unused slot so derived equality stays canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub shape: BlockShape,
    pub position: Position,
    steps: [Direction; 2],
    step_count: u8,
}

impl Move {
    /// A one-step move.
    pub const fn single(shape: BlockShape, position: Position, step: Direction) -> Self {
        Move {
            shape,
            position,
            steps: [step, step],
            step_count: 1,
        }
    }

    /// A two-step move.
    pub const fn double(
        shape: BlockShape,
        position: Position,
        first: Direction,
        second: Direction,
    ) -> Self {
        Move {
            shape,
            position,
            steps: [first, second],
            step_count: 2,
        }
    }

    /// The ordered unit steps (length 1 or 2).
    #[inline]
    pub fn steps(&self) -> &[Direction] {
        &self.steps[..self.step_count as usize]
    }

    /// The block being moved, at its pre-move location.
    #[inline]
    pub const fn block(&self) -> PlacedBlock {
        PlacedBlock::new(self.shape, self.position)
    }

    /// Top-left position of the block after all steps.
    pub fn destination(&self) -> Position {
        self.steps()
            .iter()
            .fold(self.position, |pos, &step| pos.shifted(step))
    }

    /// The move that undoes this one.
    ///
    /// Starts from the destination, with the step list reversed and each
    /// direction flipped.
    pub fn opposite(&self) -> Move {
        let position = self.destination();
        if self.step_count == 1 {
            Move::single(self.shape, position, self.steps[0].opposite())
        } else {
            Move::double(
                self.shape,
                position,
                self.steps[1].opposite(),
                self.steps[0].opposite(),
            )
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} ", self.shape, self.position)?;
        for (i, step) in self.steps().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// The classic Klotski starting layout ("escape of the caocao general").
///
/// Solvable in 81 moves.
pub const CLASSIC_LAYOUT: &[PlacedBlock] = &[
    PlacedBlock::new(BlockShape::Tall, Position::new(0, 0)),
    PlacedBlock::new(BlockShape::Square, Position::new(0, 1)),
    PlacedBlock::new(BlockShape::Tall, Position::new(0, 3)),
    PlacedBlock::new(BlockShape::Tall, Position::new(2, 0)),
    PlacedBlock::new(BlockShape::Wide, Position::new(2, 1)),
    PlacedBlock::new(BlockShape::Tall, Position::new(2, 3)),
    PlacedBlock::new(BlockShape::Single, Position::new(3, 1)),
    PlacedBlock::new(BlockShape::Single, Position::new(3, 2)),
    PlacedBlock::new(BlockShape::Single, Position::new(4, 0)),
    PlacedBlock::new(BlockShape::Single, Position::new(4, 3)),
];
