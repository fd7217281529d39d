//! Collision and placement rules.
//!
//! [`fits`] / [`can_place`] are the only legality check in the engine; every
//! move and rotation goes through them before it is committed. [`lock`] merges
//! a piece into the board and clears completed rows.

use log::{debug, warn};

use crate::board::Board;
use crate::piece::Piece;
use crate::pieces::Shape;

/// Whether `shape` with its top-left at column `x`, row `y` fits on `board`.
///
/// Every filled cell must land in a column inside the board and a row above
/// the floor. Cells above the top edge (negative rows) are always allowed;
/// cells on the board must be empty.
pub fn fits(board: &Board, shape: &Shape, x: i32, y: i32) -> bool {
    let cols = board.cols() as i32;
    let rows = board.rows() as i32;

    shape.cells().iter().all(|&(r, c)| {
        let row = y + r as i32;
        let col = x + c as i32;
        if col < 0 || col >= cols || row >= rows {
            return false;
        }
        row < 0 || !board.is_occupied(row, col)
    })
}

/// Whether `piece`, with its current shape, can be shifted by `(dx, dy)`.
pub fn can_place(board: &Board, piece: &Piece, dx: i32, dy: i32) -> bool {
    fits(board, &piece.shape, piece.x + dx, piece.y + dy)
}

/// Result of merging a piece into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    /// Cells written into the board.
    pub cells_written: usize,
    /// Cells that sat above the top edge and were dropped.
    pub cells_dropped: usize,
    pub lines_cleared: usize,
}

/// Write `piece`'s color into the board, then clear full rows.
///
/// Line clearing runs even if nothing was written.
pub fn lock(board: &mut Board, piece: &Piece) -> LockOutcome {
    let mut cells_written = 0;
    let mut cells_dropped = 0;

    for (row, col) in piece.board_cells() {
        match board.set_cell(row, col, piece.color) {
            Ok(()) => cells_written += 1,
            Err(err) => {
                warn!("dropping {:?} cell on lock: {}", piece.kind, err);
                cells_dropped += 1;
            }
        }
    }

    let lines_cleared = board.clear_full_lines();
    debug!(
        "locked {:?} at ({}, {}): {} cells, {} lines cleared",
        piece.kind, piece.y, piece.x, cells_written, lines_cleared
    );

    LockOutcome {
        cells_written,
        cells_dropped,
        lines_cleared,
    }
}
