//! Terminal rendering for the game.
//!
//! Snapshots are drawn into a plain framebuffer ([`fb`]) by [`game_view`],
//! then flushed to the terminal by [`renderer`] with cell-level diffing.
//! Board cells are drawn two columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
