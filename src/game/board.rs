use std::fmt;

use crate::error::DimensionError;

use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character marker for plain-text output
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

/// Fixed-size grid of cells. Row 0 is the top, row `height - 1` is the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Result<Self, DimensionError> {
        if height == 0 || width == 0 {
            return Err(DimensionError::Zero { height, width });
        }

        Ok(Board::blank(height, width))
    }

    /// Empty board without the dimension check, for sizes already known valid
    pub(super) fn blank(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![vec![Cell::Empty; width]; height],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position.
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Get the cell at a position, or `None` when it is off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterate over the rows, top first
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Landing row for a piece dropped into `col`: the lowest empty row,
    /// or `None` if the column is full or does not exist
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }

        (0..self.height)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Write `cell` at (row, col). The caller picks the position with
    /// [`Board::lowest_empty_row`]; occupied cells are never overwritten.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(
            self.cells[row][col].is_empty(),
            "cell ({row}, {col}) is already occupied"
        );
        self.cells[row][col] = cell;
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

/// Plain-text grid, top row first, with a footer of column indices (mod 10)
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        for col in 0..self.width {
            write!(f, " {}", col % 10)?;
        }
        Ok(())
    }
}
