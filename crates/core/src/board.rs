//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is either empty or holds the
//! color of a locked piece. Storage is a flat row-major vector sized once at
//! construction; the dimensions never change afterwards.
//!
//! Coordinates are `(row, col)`: row 0 is the top, col 0 is the left edge.
//! Accessors take signed coordinates so callers can ask about cells above the
//! board (negative rows) without casting; such cells are simply out of range.

use std::fmt;

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Out-of-range access to a board cell.
///
/// Writing outside the grid means a caller skipped the placement check,
/// which is a defect rather than a game condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "cell ({row}, {col}) is outside the {rows}x{cols} board"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// The game board - fixed `rows x cols` grid using flat storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some((row as usize) * self.cols + (col as usize))
    }

    fn out_of_bounds(&self, row: i32, col: i32) -> BoardError {
        BoardError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether (row, col) holds a color.
    ///
    /// Out-of-range coordinates report occupied, so a bounds bug can only
    /// ever block a move, never let a piece through a wall.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        !matches!(self.get(row, col), Some(None))
    }

    /// Check if (row, col) is inside the board
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Write a color into a cell.
    pub fn set_cell(&mut self, row: i32, col: i32, color: Color) -> Result<(), BoardError> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[idx] = Some(color);
        Ok(())
    }

    /// Reset a cell to empty.
    pub fn clear_cell(&mut self, row: i32, col: i32) -> Result<(), BoardError> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[idx] = None;
        Ok(())
    }

    fn row_slice(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row_slice(row).iter().all(|cell| cell.is_some())
    }

    /// Remove row `row` and shift every row above it down by one.
    /// The top row becomes empty.
    fn collapse_row(&mut self, row: usize) {
        let width = self.cols;

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, r * width);
        }

        self.cells[..width].fill(None);
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Rows are scanned bottom to top. After a full row collapses, the row
    /// that slid into its place is examined again before moving up, so
    /// stacked full rows are all removed in a single call.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = self.rows;

        while row > 0 {
            let candidate = row - 1;
            if self.is_row_full(candidate) {
                self.collapse_row(candidate);
                cleared += 1;
                // re-check the same index
                continue;
            }
            row -= 1;
        }

        cleared
    }

    /// Iterate rows from top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows of `'.'` (empty) and any other char (filled
    /// with `color`). Intended for tests and tools.
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty or have different lengths.
    pub fn from_ascii(rows: &[&str], color: Color) -> Self {
        let cols = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        assert!(
            rows.iter().all(|r| r.chars().count() == cols),
            "ragged board rows"
        );
        let mut board = Self::new(rows.len(), cols);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch != '.' {
                    board.cells[r * cols + c] = Some(color);
                }
            }
        }
        board
    }

    /// Render occupancy as rows of `'#'` / `'.'`.
    pub fn to_ascii(&self) -> Vec<String> {
        self.rows_iter()
            .map(|row| {
                row.iter()
                    .map(|c| if c.is_some() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_HEIGHT as usize, BOARD_WIDTH as usize)
    }
}
