//! Board module - manages the game grid
//!
//! The board is a WIDTH x HEIGHT grid (10x20 by default) where each cell is
//! empty or locked by a piece kind. Storage is a flat row-major vector sized
//! once at construction; the dimensions never change afterwards.
//!
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Rows above the board (y < 0) are treated as empty space
//! for occupancy queries, which lets a piece spawn partly off the top.

use crate::config::{ConfigError, GameConfig};
use crate::shapes::Matrix;
use crate::types::{Cell, PieceKind};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the default 10x20 dimensions
    pub fn new() -> Self {
        let cfg = GameConfig::default();
        Self::empty(cfg.width, cfg.height)
    }

    /// Create an empty board with custom dimensions
    pub fn with_size(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        Ok(Self::empty(width, height))
    }

    /// Create an empty board for an already-validated config
    pub(crate) fn for_config(cfg: &GameConfig) -> Self {
        Self::empty(cfg.width, cfg.height)
    }

    fn empty(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied by a locked cell
    ///
    /// Rows above the board are always empty; positions left, right or below
    /// the board are not occupied either (bounds are the caller's concern).
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is outside the visible grid
    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Lock a matrix onto the board with its top-left cell at (x, y)
    ///
    /// Occupied cells above the board are dropped. Returns the number of cells
    /// written.
    pub fn lock(&mut self, matrix: &Matrix, x: i16, y: i16, kind: PieceKind) -> usize {
        let mut written = 0;
        for (dx, dy) in matrix.minos() {
            let py = y + dy;
            if py < 0 {
                continue;
            }
            if self.set(x + dx, py, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row and return how many were removed
    ///
    /// Scans bottom-to-top. A full row is removed, everything above it shifts
    /// down one slot and an empty row appears at the top; the same row index
    /// is then examined again before the scan continues upwards.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut y = self.height as usize;

        while y > 0 {
            let row = y - 1;
            if !self.is_row_full(row) {
                y -= 1;
                continue;
            }

            // copy_within handles the overlapping ranges.
            self.cells.copy_within(0..row * width, width);
            self.cells[..width].fill(None);
            cleared += 1;
        }

        cleared
    }

    /// Write the board into a row-major grid of encoded values
    ///
    /// 0 = empty, `index + 1` = locked by that catalog entry.
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(
            self.cells
                .iter()
                .map(|cell| cell.map_or(0, PieceKind::cell_value)),
        );
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with one kind, except for the listed columns
    ///
    /// Scenario setup for tests and benches; not part of normal play.
    #[doc(hidden)]
    pub fn fill_row_except(&mut self, y: i16, kind: PieceKind, holes: &[i16]) {
        for x in 0..self.width as i16 {
            if !holes.contains(&x) {
                self.set(x, y, Some(kind));
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::spawn_matrix;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
        assert_eq!(board.index(0, -1), None);
    }

    #[test]
    fn test_custom_dimensions() {
        let board = Board::with_size(6, 8).unwrap();
        assert_eq!((board.width(), board.height()), (6, 8));
        assert_eq!(board.cells().len(), 48);
        assert_eq!(Board::with_size(0, 8), Err(ConfigError::ZeroWidth));
        assert_eq!(Board::with_size(6, 0), Err(ConfigError::ZeroHeight));
    }

    #[test]
    fn test_lock_drops_cells_above_board() {
        let mut board = Board::new();
        // Vertical I with its top two cells above row 0.
        let i = spawn_matrix(PieceKind::I).rotate_cw();
        let written = board.lock(&i, 3, -2, PieceKind::I);
        assert_eq!(written, 2);
        assert!(board.is_occupied(3, 0));
        assert!(board.is_occupied(3, 1));
        assert!(!board.is_occupied(3, 2));
    }

    #[test]
    fn test_clear_rechecks_same_row_after_shift() {
        let mut board = Board::new();
        // Two adjacent full rows: after removing 19, old row 18 lands on 19 and
        // must be removed in the same pass.
        board.fill_row_except(18, PieceKind::T, &[]);
        board.fill_row_except(19, PieceKind::T, &[]);
        board.set(2, 17, Some(PieceKind::J));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::J)));
        assert!(board.cells()[..190].iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_fill_row_except_leaves_holes() {
        let mut board = Board::new();
        board.fill_row_except(19, PieceKind::S, &[0, 9]);

        assert!(!board.is_row_full(19));
        assert!(!board.is_occupied(0, 19));
        assert!(!board.is_occupied(9, 19));
        assert!((1..9).all(|x| board.is_occupied(x, 19)));
        assert!(!board.is_occupied(1, 18));
    }

    #[test]
    fn test_write_u8_grid_encoding() {
        let mut board = Board::with_size(2, 2).unwrap();
        board.set(0, 0, Some(PieceKind::I));
        board.set(1, 1, Some(PieceKind::J));

        let mut out = vec![9; 10];
        board.write_u8_grid(&mut out);
        assert_eq!(out, vec![1, 0, 0, 7]);
    }
}
