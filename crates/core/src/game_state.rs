//! Game state module - the session state machine
//!
//! This module ties together the board, the active piece, the shape source
//! and scoring. It owns all mutable session state; collaborators drive it
//! through commands and gravity ticks and read it back through snapshots.
//!
//! Lifecycle: `NotStarted` → (`start`) → `Running` → (blocked spawn) →
//! `GameOver`. Only [`GameState::restart`] leaves `GameOver`.

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::piece::{landing_y, try_move, try_rotate, Tetromino};
use crate::rng::{ShapeSource, UniformSource};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::{Command, GameStatus, PieceKind};

/// What happened when a piece could not descend any further
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingEvent {
    /// Kind of the piece that locked
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Points added by this landing
    pub points: u32,
    /// The follow-up spawn was blocked
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    config: GameConfig,
    board: Board,
    active: Option<Tetromino>,
    next: Option<PieceKind>,
    source: S,
    score: u32,
    lines: u32,
    /// Number of successful spawns this session.
    pieces: u32,
    status: GameStatus,
}

impl GameState<UniformSource> {
    /// Create a new default-sized game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let config = GameConfig::default();
        Self::build(config, Board::for_config(&config), UniformSource::new(seed))
    }
}

impl Default for GameState<UniformSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: ShapeSource> GameState<S> {
    /// Create a game with a custom config and shape source
    pub fn with_source(config: GameConfig, source: S) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        Ok(Self::build(config, Board::for_config(&config), source))
    }

    /// Create a game on a pre-filled board (scenario setups and tests)
    pub fn with_board(
        config: GameConfig,
        board: Board,
        source: S,
    ) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        if board.width() != config.width || board.height() != config.height {
            return Err(ConfigError::BoardSizeMismatch);
        }
        Ok(Self::build(config, board, source))
    }

    fn build(config: GameConfig, board: Board, source: S) -> Self {
        Self {
            config,
            board,
            active: None,
            next: None,
            source,
            score: 0,
            lines: 0,
            pieces: 0,
            status: GameStatus::NotStarted,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next.map(NextSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::NotStarted {
            return false;
        }
        self.spawn()
    }

    /// Promote the lookahead piece to active and draw a new lookahead
    ///
    /// The new piece is placed un-rotated at the spawn origin. If it does not
    /// fit there the game is over. Returns whether the spawn succeeded.
    pub fn spawn(&mut self) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }

        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.source.next_kind(),
        };
        self.next = Some(self.source.next_kind());

        let piece = Tetromino::new(kind, self.config.spawn_x, self.config.spawn_y);
        if !piece.is_valid(&self.board) {
            self.active = None;
            self.status = GameStatus::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.pieces = self.pieces.wrapping_add(1);
        self.status = GameStatus::Running;
        true
    }

    /// Gravity step: descend one row, or land if blocked
    pub fn gravity_tick(&mut self) -> Option<LandingEvent> {
        self.step_down()
    }

    /// Player-requested descent; identical to a gravity step
    pub fn soft_drop(&mut self) -> Option<LandingEvent> {
        self.step_down()
    }

    /// Drop straight to the landing row and land immediately
    pub fn hard_drop(&mut self) -> Option<LandingEvent> {
        let active = self.playable_piece()?;
        let dropped = Tetromino {
            y: landing_y(&active, &self.board),
            ..active
        };
        Some(self.land(dropped))
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    /// Rotate clockwise; a blocked rotation leaves the piece unchanged
    pub fn rotate_cw(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };
        match try_rotate(&active, &self.board) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Apply one input command; returns whether the state changed
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => {
                let before = self.active;
                let landed = self.soft_drop();
                landed.is_some() || self.active != before
            }
            Command::RotateCw => self.rotate_cw(),
        }
    }

    /// Wipe the board and score and start a fresh game with the same source
    pub fn restart(&mut self) -> bool {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.lines = 0;
        self.pieces = 0;
        self.status = GameStatus::NotStarted;
        self.start()
    }

    fn playable_piece(&self) -> Option<Tetromino> {
        if !self.status.is_running() {
            return None;
        }
        self.active
    }

    fn shift(&mut self, dx: i16) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };
        match try_move(&active, dx, &self.board) {
            Some(moved) => {
                self.active = Some(moved);
                true
            }
            None => false,
        }
    }

    fn step_down(&mut self) -> Option<LandingEvent> {
        let active = self.playable_piece()?;
        let below = active.shifted(0, 1);
        if below.is_valid(&self.board) {
            self.active = Some(below);
            return None;
        }
        Some(self.land(active))
    }

    /// Lock, clear rows, score, and spawn the next piece
    fn land(&mut self, piece: Tetromino) -> LandingEvent {
        self.board.lock(&piece.matrix, piece.x, piece.y, piece.kind);
        self.active = None;

        let cleared = self.board.clear_full_rows();
        let points = line_clear_score(cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);

        let spawned = self.spawn();

        LandingEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            points,
            game_over: !spawned,
        }
    }
}
