//! Input translation (engine-facing).
//!
//! This crate is independent of the core state machine. It turns raw input
//! into the four [`Command`](crate::types::Command)s the core accepts:
//! `crossterm` key events through [`map`], and touch start/end vectors through
//! [`gesture`].

pub mod gesture;
pub mod map;

pub use blockfall_types as types;

pub use gesture::{GestureMapper, Swipe};
pub use map::{handle_key_event, should_quit, KeyAction};
