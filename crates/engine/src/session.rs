use crate::core::{
    ConfigError, GameConfig, GameSnapshot, GameState, LandingEvent, ShapeSource, UniformSource,
};
use crate::timer::{GravityTimer, TickOutcome};
use crate::types::{Command, GameStatus};

/// A game plus its gravity clock: the one object a frontend drives.
#[derive(Debug, Clone)]
pub struct Session<S = UniformSource> {
    game: GameState<S>,
    timer: GravityTimer,
}

impl Session<UniformSource> {
    pub fn new(seed: u32) -> Self {
        let game = GameState::new(seed);
        let timer = GravityTimer::new(game.config().drop_interval_ms);
        Self { game, timer }
    }
}

impl<S: ShapeSource> Session<S> {
    pub fn with_source(config: GameConfig, source: S) -> Result<Self, ConfigError> {
        let game = GameState::with_source(config, source)?;
        Ok(Self::from_game(game))
    }

    pub fn from_game(game: GameState<S>) -> Self {
        let timer = GravityTimer::new(game.config().drop_interval_ms);
        Self { game, timer }
    }

    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn start(&mut self) -> bool {
        self.timer.reset();
        self.game.start()
    }

    pub fn restart(&mut self) -> bool {
        self.timer.reset();
        self.game.restart()
    }

    /// Apply a player command immediately, between gravity ticks
    pub fn apply(&mut self, command: Command) -> bool {
        self.game.apply(command)
    }

    pub fn hard_drop(&mut self) -> Option<LandingEvent> {
        self.game.hard_drop()
    }

    /// Per-frame entry point for the frontend loop
    pub fn advance_if_due(&mut self, elapsed_ms: u32) -> TickOutcome {
        self.timer.advance_if_due(&mut self.game, elapsed_ms)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }
}
