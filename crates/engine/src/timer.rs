use crate::core::{GameState, LandingEvent, ShapeSource};

/// Fixed-interval gravity clock, decoupled from the frame rate.
///
/// The frontend reports the time elapsed since its previous frame. Time only
/// accumulates while the game is running; once the total strictly exceeds the
/// interval, one gravity tick is resolved and the total resets to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    since_tick_ms: u32,
}

/// Result of one `advance_if_due` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Interval not yet exceeded (or the game is not running)
    Idle,
    /// Gravity moved the piece one row down
    Fell,
    /// Gravity landed the piece
    Landed(LandingEvent),
}

impl GravityTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            since_tick_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated since the last resolved tick
    pub fn pending_ms(&self) -> u32 {
        self.since_tick_ms
    }

    pub fn reset(&mut self) {
        self.since_tick_ms = 0;
    }

    /// Add `elapsed_ms` and resolve at most one gravity tick
    pub fn advance_if_due<S: ShapeSource>(
        &mut self,
        game: &mut GameState<S>,
        elapsed_ms: u32,
    ) -> TickOutcome {
        if !game.status().is_running() {
            return TickOutcome::Idle;
        }

        self.since_tick_ms = self.since_tick_ms.saturating_add(elapsed_ms);
        if self.since_tick_ms <= self.interval_ms {
            return TickOutcome::Idle;
        }

        self.since_tick_ms = 0;
        match game.gravity_tick() {
            Some(event) => TickOutcome::Landed(event),
            None => TickOutcome::Fell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceSource;
    use crate::types::PieceKind;

    fn running_game() -> GameState<SequenceSource> {
        let source = SequenceSource::repeat(PieceKind::O);
        let mut game = GameState::with_source(Default::default(), source).unwrap();
        game.start();
        game
    }

    #[test]
    fn exactly_interval_is_not_due() {
        let mut game = running_game();
        let mut timer = GravityTimer::new(1000);

        assert_eq!(timer.advance_if_due(&mut game, 1000), TickOutcome::Idle);
        assert_eq!(game.active().unwrap().y, 0);

        assert_eq!(timer.advance_if_due(&mut game, 1), TickOutcome::Fell);
        assert_eq!(game.active().unwrap().y, 1);
        assert_eq!(timer.pending_ms(), 0);
    }

    #[test]
    fn long_frame_resolves_one_tick_only() {
        let mut game = running_game();
        let mut timer = GravityTimer::new(1000);

        assert_eq!(timer.advance_if_due(&mut game, 5000), TickOutcome::Fell);
        assert_eq!(game.active().unwrap().y, 1);
        // Remainder is discarded, not carried over.
        assert_eq!(timer.pending_ms(), 0);
    }

    #[test]
    fn idle_until_started() {
        let source = SequenceSource::repeat(PieceKind::O);
        let mut game = GameState::with_source(Default::default(), source).unwrap();
        let mut timer = GravityTimer::new(1000);

        assert_eq!(timer.advance_if_due(&mut game, 1500), TickOutcome::Idle);
        assert_eq!(timer.pending_ms(), 0);
    }

    #[test]
    fn landing_is_reported() {
        let mut game = running_game();
        let mut timer = GravityTimer::new(10);

        let mut landed = None;
        for _ in 0..40 {
            if let TickOutcome::Landed(event) = timer.advance_if_due(&mut game, 11) {
                landed = Some(event);
                break;
            }
        }
        let event = landed.expect("O piece should land within 19 ticks");
        assert_eq!(event.kind, PieceKind::O);
        assert_eq!(event.lines_cleared, 0);
    }
}
