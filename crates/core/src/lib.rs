//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has **no dependencies** on
//! UI or terminal I/O, making it:
//!
//! - **Deterministic**: the randomizer is injected, so a fixed seed replays a game
//! - **Testable**: every rule is reachable without a terminal
//! - **Portable**: the same engine can sit behind any renderer
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of colored cells, owns line clearing
//! - [`pieces`]: shape matrices, rotation, and the seven-entry catalog
//! - [`piece`]: the active piece (shape + color + anchor)
//! - [`placement`]: collision checks and lock-in
//! - [`game_state`]: the controller state machine
//! - [`rng`]: randomizer trait and implementations
//!
//! # Game Rules
//!
//! - Pieces spawn on the top row, horizontally centered, chosen uniformly
//! - Moves and rotations that would collide are silently rejected
//! - Rotation is a plain clockwise turn in place; there are no wall kicks
//! - A blocked downward move locks the piece and clears full rows
//! - The next piece appears on the following tick
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, Intents};
//!
//! let mut game = GameState::new(12345);
//!
//! // The first tick spawns a piece.
//! let report = game.tick(Intents::none());
//! assert!(report.spawned.is_some());
//!
//! game.tick(Intents::from(GameAction::MoveRight));
//! game.tick(Intents::from_actions([GameAction::SoftDrop, GameAction::Rotate]));
//! assert!(game.active().is_some());
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod placement;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use game_state::{GameState, MoveOutcome, MoveResolution, Phase, RotateOutcome, TickReport};
pub use piece::Piece;
pub use pieces::{get_shape, Shape, CATALOG};
pub use placement::{can_place, fits, lock, LockOutcome};
pub use rng::{Randomizer, SequenceRng, SimpleRng};
