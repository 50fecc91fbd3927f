//! Piece module - the active piece and its transforms
//!
//! A piece is a catalog kind, its current orientation matrix and the board
//! position of the matrix's top-left cell. Every transform produces a
//! candidate piece and validates it against the board; a rejected candidate
//! leaves the original untouched. Rotation tries exactly one candidate, with
//! no wall or floor kicks.

use crate::board::Board;
use crate::shapes::{spawn_matrix, Matrix};
use crate::types::PieceKind;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub x: i16,
    pub y: i16,
}

impl Tetromino {
    /// Create an un-rotated piece with its top-left cell at (x, y)
    pub fn new(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            matrix: spawn_matrix(kind),
            x,
            y,
        }
    }

    /// Check if the piece fits on the board at its current position
    pub fn is_valid(&self, board: &Board) -> bool {
        is_valid_position(&self.matrix, self.x, self.y, board)
    }

    /// Board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.matrix
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Width of the current orientation in columns
    pub fn width(&self) -> usize {
        self.matrix.cols()
    }

    /// Same piece shifted by (dx, dy), unchecked
    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece rotated clockwise, recentred on its horizontal footprint, unchecked
    pub fn rotated(&self) -> Self {
        let matrix = self.matrix.rotate_cw();
        let delta = matrix.cols() as i16 - self.matrix.cols() as i16;
        Self {
            matrix,
            x: self.x - delta.div_euclid(2),
            ..*self
        }
    }
}

/// Check whether a matrix fits on the board with its top-left cell at (x, y)
///
/// Each occupied cell must be inside the columns and above the bottom edge.
/// Cells above row 0 are always fine; any other cell must be empty.
pub fn is_valid_position(matrix: &Matrix, x: i16, y: i16, board: &Board) -> bool {
    let width = board.width() as i16;
    let height = board.height() as i16;
    matrix.minos().into_iter().all(|(dx, dy)| {
        let px = x + dx;
        let py = y + dy;
        if px < 0 || px >= width || py >= height {
            return false;
        }
        py < 0 || !board.is_occupied(px, py)
    })
}

/// Try to shift a piece horizontally; `None` when the target is blocked
pub fn try_move(piece: &Tetromino, dx: i16, board: &Board) -> Option<Tetromino> {
    let candidate = piece.shifted(dx, 0);
    candidate.is_valid(board).then_some(candidate)
}

/// Try to rotate a piece clockwise; `None` when the single candidate is blocked
pub fn try_rotate(piece: &Tetromino, board: &Board) -> Option<Tetromino> {
    let candidate = piece.rotated();
    candidate.is_valid(board).then_some(candidate)
}

/// Lowest row the piece can reach by falling straight down
pub fn landing_y(piece: &Tetromino, board: &Board) -> i16 {
    let mut y = piece.y;
    while is_valid_position(&piece.matrix, piece.x, y + 1, board) {
        y += 1;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_recentres_on_width_change() {
        // I: width 4 -> 1, floor((1 - 4) / 2) = -2, so x moves right by two.
        let i = Tetromino::new(PieceKind::I, 3, 5);
        let r = i.rotated();
        assert_eq!(r.width(), 1);
        assert_eq!(r.x, 5);

        // Back again: floor((4 - 1) / 2) = 1.
        let back = r.rotated();
        assert_eq!(back.x, 4);

        // T: width 3 -> 2, floor(-1 / 2) = -1.
        let t = Tetromino::new(PieceKind::T, 4, 0).rotated();
        assert_eq!(t.x, 5);
    }

    #[test]
    fn test_rotation_blocked_by_floor_is_rejected() {
        let board = Board::new();
        // Flat I on the bottom row cannot stand up.
        let i = Tetromino::new(PieceKind::I, 3, 19);
        assert!(i.is_valid(&board));
        assert_eq!(try_rotate(&i, &board), None);
    }

    #[test]
    fn test_off_top_cells_are_valid() {
        let board = Board::new();
        let i = Tetromino::new(PieceKind::I, 0, 0).rotated();
        assert!(is_valid_position(&i.matrix, 0, -3, &board));
        assert!(!is_valid_position(&i.matrix, -1, -3, &board));
    }

    #[test]
    fn test_landing_y_on_empty_board() {
        let board = Board::new();
        let o = Tetromino::new(PieceKind::O, 4, 0);
        assert_eq!(landing_y(&o, &board), 18);
    }

    #[test]
    fn test_cells_are_absolute() {
        let s = Tetromino::new(PieceKind::S, 2, 3);
        let cells: Vec<_> = s.cells().collect();
        assert_eq!(cells, vec![(2, 3), (3, 3), (3, 4), (4, 4)]);
    }
}
