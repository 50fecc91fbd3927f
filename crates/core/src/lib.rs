//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole game-state engine: the grid, the active-piece
//! state machine and scoring. It has **zero dependencies** on rendering,
//! input devices or I/O:
//!
//! - **Deterministic**: the shape source is injected, so a seed or a scripted
//!   sequence replays the same game
//! - **Synchronous**: every operation returns immediately; the caller owns the
//!   clock (see `blockfall-engine`)
//! - **Silent rejection**: blocked moves and rotations leave the piece where it
//!   was; nothing in the play loop returns an error
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven-entry shape catalog and occupancy matrices
//! - [`board`]: grid storage, locking and full-row compaction
//! - [`piece`]: the active piece, validity checks, move and rotate transforms
//! - [`game_state`]: spawn / land / score state machine
//! - [`rng`]: injectable shape sources (seeded uniform, scripted, closures)
//! - [`scoring`]: the per-landing bonus table
//! - [`snapshot`]: read-only view for renderers
//! - [`config`]: validated configuration and construction errors
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Command, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateCw);
//! game.hard_drop();
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert_eq!(game.score(), 0); // a lone piece never fills a row
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, LandingEvent};
pub use piece::{is_valid_position, landing_y, try_move, try_rotate, Tetromino};
pub use rng::{SequenceSource, ShapeSource, SimpleRng, UniformSource};
pub use scoring::line_clear_score;
pub use shapes::{piece_color, shape_rows, spawn_matrix, Matrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
