use crate::piece::Tetromino;
use crate::shapes::{spawn_matrix, Matrix};
use crate::types::{GameStatus, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub x: i16,
    pub y: i16,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub matrix: Matrix,
}

impl From<PieceKind> for NextSnapshot {
    fn from(kind: PieceKind) -> Self {
        Self {
            kind,
            matrix: spawn_matrix(kind),
        }
    }
}

/// Read-only view of a session for renderers.
///
/// `board` is row-major, `width * height` long: 0 is empty, `index + 1` is a
/// cell locked by that catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<NextSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Encoded cell value at (x, y); 0 outside the board
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        if x >= self.width as usize || y >= self.height as usize {
            return 0;
        }
        self.board[y * self.width as usize + x]
    }

    pub fn playable(&self) -> bool {
        self.status.is_running()
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
