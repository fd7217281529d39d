//! Game state module - the controller
//!
//! Owns the board, the active piece and the randomizer, and drives the
//! spawn -> move/rotate -> lock -> clear cycle one tick at a time.
//!
//! The controller has two phases:
//!
//! | Phase | Event | Next phase |
//! |-------|-------|------------|
//! | `NoActivePiece` | tick | `ActivePiece` (spawn) |
//! | `ActivePiece` | legal move / rotation | `ActivePiece` |
//! | `ActivePiece` | blocked sideways/up move, blocked rotation | `ActivePiece` (no-op) |
//! | `ActivePiece` | blocked downward move | `NoActivePiece` (lock + clear) |
//!
//! Spawning is deferred to the tick after a lock, so there is exactly one tick
//! where input has no piece to act on. There is no terminal phase.

use log::{debug, warn};

use crate::board::Board;
use crate::piece::Piece;
use crate::placement::{can_place, lock, LockOutcome};
use crate::rng::{Randomizer, SimpleRng};
use crate::types::{ConfigError, GameAction, GameConfig, Intents, PieceKind, PIECE_KIND_COUNT};

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoActivePiece,
    ActivePiece,
}

/// How a translation attempt resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResolution {
    /// The target placement is legal: update the anchor.
    Commit,
    /// A downward move was blocked: the piece has landed.
    Lock,
    /// Blocked sideways or upward: nothing happens.
    Ignore,
}

impl MoveResolution {
    /// Transition table for a move by `dy` rows whose target is `placeable`.
    pub fn resolve(placeable: bool, dy: i32) -> Self {
        match (placeable, dy > 0) {
            (true, _) => MoveResolution::Commit,
            (false, true) => MoveResolution::Lock,
            (false, false) => MoveResolution::Ignore,
        }
    }
}

/// What a call to [`GameState::move_piece`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    NoPiece,
    Moved,
    Blocked,
    Locked { lines_cleared: usize },
}

/// What a call to [`GameState::rotate`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    NoPiece,
    Rotated,
    Rejected,
}

/// Summary of one [`GameState::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Kind spawned at the start of this tick, if any.
    pub spawned: Option<PieceKind>,
    pub locked: bool,
    pub lines_cleared: usize,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Option<Piece>,
    rng: R,
    /// Pieces spawned so far.
    pieces_spawned: u64,
    /// Rows cleared so far.
    lines_cleared: u64,
}

impl GameState<SimpleRng> {
    /// Create a default-size game with a seeded LCG randomizer.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(Board::default(), SimpleRng::new(seed))
    }

    /// Create a game from `config` after validating it. `seed` falls back to 1.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_rng(
            Board::new(config.rows as usize, config.cols as usize),
            SimpleRng::new(config.seed.unwrap_or(1)),
        ))
    }
}

impl<R: Randomizer> GameState<R> {
    /// Create a game on `board` that draws pieces from `rng`.
    pub fn with_rng(board: Board, rng: R) -> Self {
        Self {
            board,
            active: None,
            rng,
            pieces_spawned: 0,
            lines_cleared: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.active.is_some() {
            Phase::ActivePiece
        } else {
            Phase::NoActivePiece
        }
    }

    pub fn pieces_spawned(&self) -> u64 {
        self.pieces_spawned
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    /// Spawn a random piece, replacing any active one.
    pub fn spawn(&mut self) -> PieceKind {
        let index = self.rng.next_index(PIECE_KIND_COUNT);
        // next_index honors the bound; fall back to the first entry regardless.
        let kind = PieceKind::from_index(index).unwrap_or(PieceKind::I);
        self.spawn_kind(kind);
        kind
    }

    /// Spawn a specific kind at the top-center of the board.
    ///
    /// No collision check is done: on a stacked-up board the new piece may
    /// overlap locked cells.
    pub fn spawn_kind(&mut self, kind: PieceKind) {
        let piece = Piece::spawn(kind, self.board.cols());
        if !can_place(&self.board, &piece, 0, 0) {
            warn!(
                "{:?} spawned at ({}, {}) overlapping locked cells",
                kind, piece.y, piece.x
            );
        }
        debug!("spawned {:?} at ({}, {})", kind, piece.y, piece.x);
        self.active = Some(piece);
        self.pieces_spawned += 1;
    }

    /// Whether the active piece can be shifted by `(dx, dy)`.
    ///
    /// `false` when there is no active piece.
    pub fn can_move(&self, dx: i32, dy: i32) -> bool {
        self.active
            .as_ref()
            .is_some_and(|p| can_place(&self.board, p, dx, dy))
    }

    /// Try to shift the active piece by `(dx, dy)`.
    ///
    /// A blocked downward move locks the piece; other blocked moves are
    /// ignored.
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        let Some(active) = self.active else {
            return MoveOutcome::NoPiece;
        };

        let placeable = can_place(&self.board, &active, dx, dy);
        match MoveResolution::resolve(placeable, dy) {
            MoveResolution::Commit => {
                self.active = Some(active.translated(dx, dy));
                MoveOutcome::Moved
            }
            MoveResolution::Lock => {
                let outcome = self.lock_active();
                MoveOutcome::Locked {
                    lines_cleared: outcome.map_or(0, |o| o.lines_cleared),
                }
            }
            MoveResolution::Ignore => MoveOutcome::Blocked,
        }
    }

    /// Try to rotate the active piece clockwise in place.
    ///
    /// The rotated shape must fit at the same anchor; otherwise the piece is
    /// left untouched. No kicks are attempted.
    pub fn rotate(&mut self) -> RotateOutcome {
        let Some(active) = self.active else {
            return RotateOutcome::NoPiece;
        };

        let rotated = active.rotated_cw();
        if can_place(&self.board, &rotated, 0, 0) {
            self.active = Some(rotated);
            RotateOutcome::Rotated
        } else {
            RotateOutcome::Rejected
        }
    }

    /// Merge the active piece into the board and clear full rows.
    ///
    /// Returns `None` when there is no active piece.
    pub fn lock_active(&mut self) -> Option<LockOutcome> {
        let piece = self.active.take()?;
        let outcome = lock(&mut self.board, &piece);
        self.lines_cleared += outcome.lines_cleared as u64;
        Some(outcome)
    }

    /// Apply a single intent.
    pub fn apply_action(&mut self, action: GameAction) -> MoveOutcome {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.move_piece(0, 1),
            GameAction::Rotate => match self.rotate() {
                RotateOutcome::NoPiece => MoveOutcome::NoPiece,
                RotateOutcome::Rotated => MoveOutcome::Moved,
                RotateOutcome::Rejected => MoveOutcome::Blocked,
            },
        }
    }

    /// Advance one tick: spawn if no piece is active, then apply `intents`
    /// in tick order.
    pub fn tick(&mut self, intents: Intents) -> TickReport {
        let mut report = TickReport::default();

        if self.phase() == Phase::NoActivePiece {
            report.spawned = Some(self.spawn());
        }

        for action in intents.iter() {
            if let MoveOutcome::Locked { lines_cleared } = self.apply_action(action) {
                report.locked = true;
                report.lines_cleared += lines_cleared;
            }
        }

        report
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
