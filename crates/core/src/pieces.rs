//! Pieces module - shape matrices and the piece catalog
//!
//! Every piece is a small binary matrix (at most 4x4). The catalog holds the
//! spawn orientation of each of the seven kinds as `const` data; rotation never
//! touches the catalog and always produces a fresh [`Shape`].

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind};

/// Largest edge of any shape matrix.
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a filled cell inside a shape, as `(row, col)`.
pub type CellOffset = (u8, u8);

/// Filled cells of a shape. Stack-only, no allocation.
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Immutable binary matrix of `rows x cols` filled/empty cells.
///
/// Cells outside `rows x cols` are always empty, so two shapes compare equal
/// exactly when their dimensions and visible cells match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a `0`/`1` matrix; row `r` lists the columns of that row.
    ///
    /// # Panics
    ///
    /// Panics on an empty, ragged or oversized matrix.
    pub const fn from_rows<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R > 0 && C > 0, "shape must not be empty");
        assert!(R <= MAX_SHAPE_DIM && C <= MAX_SHAPE_DIM, "shape exceeds 4x4");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    /// Number of matrix rows (the shape's height).
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of matrix columns (the shape's width).
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// `(rows, cols)` footprint.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Whether `(row, col)` is filled. Out-of-matrix cells are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Filled cells in row-major order.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.cells[r][c] {
                    out.push((r as u8, c as u8));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise.
    ///
    /// The result is `cols x rows`; old cell `[y][x]` lands at
    /// `[x][rows - 1 - y]`.
    pub fn rotated_cw(&self) -> Self {
        let old_rows = self.rows();
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for y in 0..old_rows {
            for x in 0..self.cols() {
                cells[x][old_rows - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

const I_SHAPE: Shape = Shape::from_rows([[1, 1, 1, 1]]);
const O_SHAPE: Shape = Shape::from_rows([[1, 1], [1, 1]]);
const T_SHAPE: Shape = Shape::from_rows([[1, 1, 1], [0, 1, 0]]);
const S_SHAPE: Shape = Shape::from_rows([[1, 1, 0], [0, 1, 1]]);
const Z_SHAPE: Shape = Shape::from_rows([[0, 1, 1], [1, 1, 0]]);
const L_SHAPE: Shape = Shape::from_rows([[1, 1, 1], [1, 0, 0]]);
const J_SHAPE: Shape = Shape::from_rows([[1, 1, 1], [0, 0, 1]]);

/// Spawn-orientation shapes, indexed by [`PieceKind::index`].
pub const CATALOG: [Shape; 7] = [I_SHAPE, O_SHAPE, T_SHAPE, S_SHAPE, Z_SHAPE, L_SHAPE, J_SHAPE];

/// Spawn-orientation shape of a kind.
pub fn get_shape(kind: PieceKind) -> Shape {
    CATALOG[kind.index()]
}

/// Shape and color for a catalog entry.
pub fn catalog_entry(kind: PieceKind) -> (Shape, Color) {
    (get_shape(kind), kind.color())
}

/// Column at which a shape of width `shape_cols` spawns on a board of
/// `board_cols` columns. Odd leftovers bias left.
pub fn spawn_column(board_cols: usize, shape_cols: usize) -> i32 {
    (board_cols / 2) as i32 - (shape_cols / 2) as i32
}
