//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the core state machine, the terminal renderer and the input mappers alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (4, 0) for every piece, un-rotated
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Gravity interval, fixed for the whole session |
//! | `FRAME_MS` | 16 | Frontend frame budget (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::ALL[2];
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.cell_value(), 3);
//! assert_eq!(PieceKind::from_cell_value(3), Some(piece));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for the top-left cell of a new piece's matrix
pub const SPAWN_X: i16 = 4;

/// Spawn row for the top-left cell of a new piece's matrix
pub const SPAWN_Y: i16 = 0;

/// Gravity interval (1000ms = 1 second per row)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Frontend frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Minimum swipe travel in pixels before a touch counts as a swipe instead of a tap
pub const SWIPE_THRESHOLD_PX: i32 = 30;

/// Largest row or column count of a shape matrix
pub const MAX_SHAPE_DIM: usize = 4;

/// Points per landing, indexed by rows cleared (4 or more share the last entry)
pub const LINE_CLEAR_SCORES: [u32; 5] = [0, 100, 300, 700, 1000];

/// The seven shape identities, in catalog order
///
/// The discriminant is the catalog index. Locked grid cells store
/// `index + 1`, so 0 can mean "empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Number of entries in the catalog
    pub const COUNT: usize = 7;

    /// Catalog index (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by catalog index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Encoded grid value for a cell locked by this kind (`index + 1`)
    pub fn cell_value(self) -> u8 {
        self as u8 + 1
    }

    /// Decode a grid value; 0 and anything past the catalog map to `None`
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_cell_value(0), None);
    /// assert_eq!(PieceKind::from_cell_value(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_cell_value(7), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_cell_value(8), None);
    /// ```
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }
}

/// The four discrete commands the core accepts from an input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance one row; lands the piece if it cannot descend
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
}

/// Lifecycle of one play session
///
/// `NotStarted` only means "no piece spawned yet"; the start screen itself is
/// owned by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

impl GameStatus {
    pub fn is_running(self) -> bool {
        self == GameStatus::Running
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked by the specified piece kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_cell_encoding() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(kind.cell_value() as usize, i + 1);
            assert_eq!(PieceKind::from_cell_value(kind.cell_value()), Some(*kind));
            assert_eq!(PieceKind::from_index(i), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(PieceKind::COUNT), None);
    }

    #[test]
    fn score_table_defaults() {
        assert_eq!(LINE_CLEAR_SCORES, [0, 100, 300, 700, 1000]);
        assert_eq!(DROP_INTERVAL_MS, 1000);
        assert_eq!((SPAWN_X, SPAWN_Y), (4, 0));
    }

    #[test]
    fn status_defaults_to_not_started() {
        assert_eq!(GameStatus::default(), GameStatus::NotStarted);
        assert!(!GameStatus::NotStarted.is_running());
        assert!(GameStatus::Running.is_running());
        assert!(!GameStatus::GameOver.is_running());
    }
}
