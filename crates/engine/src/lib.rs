//! Timing driver.
//!
//! The core state machine never looks at a clock. This crate turns a stream of
//! per-frame elapsed times into at most one gravity tick per frame, and bundles
//! the clock with a game into a [`Session`] that frontends drive.

pub mod session;
pub mod timer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use session::Session;
pub use timer::{GravityTimer, TickOutcome};
