//! Shape catalog and occupancy matrices.
//!
//! Every piece is a small row-major 0/1 matrix. Rotation produces a new matrix
//! with rows and columns swapped; positions and the board are never consulted.

use arrayvec::ArrayVec;

use crate::config::ConfigError;
use crate::types::{PieceKind, MAX_SHAPE_DIM};

/// Offset `(x, y)` of an occupied cell from the matrix's top-left corner
pub type MinoOffset = (i16, i16);

/// Occupied cells of one matrix, in row-major order
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const Z_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const L_ROWS: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
const J_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];

/// Spawn orientation rows for a piece kind
pub fn shape_rows(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => I_ROWS,
        PieceKind::O => O_ROWS,
        PieceKind::T => T_ROWS,
        PieceKind::S => S_ROWS,
        PieceKind::Z => Z_ROWS,
        PieceKind::L => L_ROWS,
        PieceKind::J => J_ROWS,
    }
}

/// Display color for a piece kind as `[r, g, b]`
pub fn piece_color(kind: PieceKind) -> [u8; 3] {
    match kind {
        PieceKind::I => [0, 255, 255],
        PieceKind::O => [255, 255, 0],
        PieceKind::T => [128, 0, 128],
        PieceKind::S => [0, 128, 0],
        PieceKind::Z => [255, 0, 0],
        PieceKind::L => [255, 165, 0],
        PieceKind::J => [0, 0, 255],
    }
}

/// Un-rotated matrix for a piece kind
pub fn spawn_matrix(kind: PieceKind) -> Matrix {
    Matrix::from_static(shape_rows(kind))
}

/// A bounded occupancy matrix (at most 4x4).
///
/// Cells outside `rows x cols` are always empty, so derived equality compares
/// occupancy and dimensions only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Matrix {
    /// Build a matrix from 0/1 rows, rejecting malformed input.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ConfigError> {
        let Some(first) = rows.first() else {
            return Err(ConfigError::EmptyShape);
        };
        if first.is_empty() {
            return Err(ConfigError::EmptyShape);
        }
        if rows.len() > MAX_SHAPE_DIM || first.len() > MAX_SHAPE_DIM {
            return Err(ConfigError::ShapeTooLarge);
        }
        if rows.iter().any(|row| row.len() != first.len()) {
            return Err(ConfigError::RaggedShape);
        }
        if rows.iter().flat_map(|row| row.iter()).any(|&v| v > 1) {
            return Err(ConfigError::InvalidShapeCell);
        }
        Ok(Self::from_static(rows))
    }

    /// Catalog constructor; the tables are checked by unit tests instead.
    fn from_static(rows: &[&[u8]]) -> Self {
        let mut m = Self {
            rows: rows.len().min(MAX_SHAPE_DIM) as u8,
            cols: rows.first().map_or(0, |r| r.len().min(MAX_SHAPE_DIM)) as u8,
            cells: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
        };
        for (y, row) in rows.iter().take(MAX_SHAPE_DIM).enumerate() {
            for (x, &v) in row.iter().take(m.cols as usize).enumerate() {
                m.cells[y][x] = v != 0;
            }
        }
        m
    }

    /// Number of rows (matrix height)
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of columns (matrix width)
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at `(row, col)` is occupied; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Rotate 90° clockwise.
    ///
    /// Output column `i` is input row `i` read bottom-to-top, so an `r x c`
    /// matrix becomes `c x r`.
    pub fn rotate_cw(&self) -> Self {
        let mut out = Self {
            rows: self.cols,
            cols: self.rows,
            cells: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
        };
        let h = self.rows();
        for y in 0..h {
            for x in 0..self.cols() {
                out.cells[x][h - 1 - y] = self.cells[y][x];
            }
        }
        out
    }

    /// Offsets of all occupied cells
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for y in 0..self.rows() {
            for x in 0..self.cols() {
                if self.cells[y][x] {
                    out.push((x as i16, y as i16));
                }
            }
        }
        out
    }

    /// Row-major 0/1 copy, for rendering and tests
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|y| (0..self.cols()).map(|x| self.cells[y][x] as u8).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_tables_are_well_formed() {
        for kind in PieceKind::ALL {
            let checked = Matrix::from_rows(shape_rows(kind));
            assert_eq!(checked, Ok(spawn_matrix(kind)), "{:?}", kind);
            assert_eq!(spawn_matrix(kind).minos().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn malformed_rows_rejected() {
        assert_eq!(Matrix::from_rows(&[]), Err(ConfigError::EmptyShape));
        assert_eq!(Matrix::from_rows(&[&[]]), Err(ConfigError::EmptyShape));
        assert_eq!(
            Matrix::from_rows(&[&[1, 1], &[1]]),
            Err(ConfigError::RaggedShape)
        );
        assert_eq!(
            Matrix::from_rows(&[&[1, 1, 1, 1, 1]]),
            Err(ConfigError::ShapeTooLarge)
        );
        assert_eq!(
            Matrix::from_rows(&[&[1], &[1], &[1], &[1], &[1]]),
            Err(ConfigError::ShapeTooLarge)
        );
        assert_eq!(
            Matrix::from_rows(&[&[1, 2]]),
            Err(ConfigError::InvalidShapeCell)
        );
    }

    #[test]
    fn rotate_t_clockwise() {
        // 010      10
        // 111  ->  11
        //          10
        let t = spawn_matrix(PieceKind::T).rotate_cw();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.to_rows(), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn rotate_l_clockwise() {
        // 111      11
        // 100  ->  01
        //          01
        let l = spawn_matrix(PieceKind::L).rotate_cw();
        assert_eq!(l.to_rows(), vec![vec![1, 1], vec![0, 1], vec![0, 1]]);
    }

    #[test]
    fn rotate_i_becomes_vertical() {
        let i = spawn_matrix(PieceKind::I).rotate_cw();
        assert_eq!((i.rows(), i.cols()), (4, 1));
        assert_eq!(i.minos().as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn is_filled_outside_matrix_is_false() {
        let o = spawn_matrix(PieceKind::O);
        assert!(o.is_filled(1, 1));
        assert!(!o.is_filled(2, 0));
        assert!(!o.is_filled(0, 2));
    }
}
