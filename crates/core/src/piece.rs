//! The active piece: a shape, its color and an anchor on the board.

use crate::pieces::{catalog_entry, spawn_column, Shape, ShapeCells};
use crate::types::{Color, PieceKind};

/// Active falling piece.
///
/// `(x, y)` is the board column/row of the shape matrix's top-left corner.
/// `y` may be negative while part of the shape sits above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece in spawn orientation at an explicit anchor.
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        let (shape, color) = catalog_entry(kind);
        Self {
            kind,
            shape,
            color,
            x,
            y,
        }
    }

    /// Create a piece at the spawn anchor for a board `board_cols` wide:
    /// top row, horizontally centered.
    pub fn spawn(kind: PieceKind, board_cols: usize) -> Self {
        let (shape, _) = catalog_entry(kind);
        Self::new(kind, spawn_column(board_cols, shape.cols()), 0)
    }

    /// Same piece shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece and anchor with the shape rotated clockwise.
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Board `(row, col)` of every filled cell.
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.offsets()
            .into_iter()
            .map(move |(r, c)| (self.y + r as i32, self.x + c as i32))
    }

    fn offsets(&self) -> ShapeCells {
        self.shape.cells()
    }
}
