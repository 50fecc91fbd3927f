//! Touch gesture classification.
//!
//! A touch is summarised by the vector from where it started to where it
//! ended, in pixels (y grows downwards). Short touches are taps; longer ones
//! are swipes along their dominant axis.

use crate::types::{Command, SWIPE_THRESHOLD_PX};

/// Start-to-end travel of one touch, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swipe {
    pub dx: i32,
    pub dy: i32,
}

impl Swipe {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Build from touch start and end points
    pub fn between(start: (i32, i32), end: (i32, i32)) -> Self {
        Self::new(end.0 - start.0, end.1 - start.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureMapper {
    threshold_px: i32,
}

impl Default for GestureMapper {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl GestureMapper {
    pub fn new(threshold_px: i32) -> Self {
        Self {
            threshold_px: threshold_px.max(0),
        }
    }

    pub fn threshold_px(&self) -> i32 {
        self.threshold_px
    }

    /// Classify a finished touch.
    ///
    /// - tap (both axes under the threshold): rotate
    /// - horizontal-dominant swipe: move towards the swipe
    /// - downward swipe: soft drop
    /// - upward swipe: rotate
    pub fn classify(&self, swipe: Swipe) -> Command {
        let ax = swipe.dx.abs();
        let ay = swipe.dy.abs();

        if ax < self.threshold_px && ay < self.threshold_px {
            return Command::RotateCw;
        }

        if ax > ay {
            if swipe.dx > 0 {
                Command::MoveRight
            } else {
                Command::MoveLeft
            }
        } else if swipe.dy > 0 {
            Command::SoftDrop
        } else {
            Command::RotateCw
        }
    }
}
