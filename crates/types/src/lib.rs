//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable from the core
//! engine, the input mapper and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! Boards of other sizes can be built at runtime through [`GameConfig`].
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 updates per second) |
//! | `BLOCK_SIZE` | 32 | Pixel edge of one board cell on a pixel surface |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameAction, Intents, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.index(), 2);
//! assert_eq!(piece.color(), Color::BLUE);
//! assert_eq!(PieceKind::from_index(2), Some(piece));
//!
//! // Intents come back in tick order regardless of insertion order.
//! let intents = Intents::from_actions([GameAction::Rotate, GameAction::MoveLeft]);
//! let applied: Vec<_> = intents.iter().collect();
//! assert_eq!(applied, [GameAction::MoveLeft, GameAction::Rotate]);
//! assert_eq!(GameAction::TICK_ORDER[0], GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 updates per second)
pub const TICK_MS: u32 = 16;

/// Edge length of one board cell, in pixels, for pixel-based surfaces.
///
/// A 10x20 board at this size is a 320x640 surface.
pub const BLOCK_SIZE: u32 = 32;

/// Number of piece kinds in the catalog.
pub const PIECE_KIND_COUNT: usize = 7;

/// Opaque RGBA color stored in board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled with a locked piece's color
pub type Cell = Option<Color>;

/// The seven piece kinds, in catalog order.
///
/// The catalog index of a kind selects both its shape and its color:
///
/// | Index | Kind | Color |
/// |-------|------|-------|
/// | 0 | I | red |
/// | 1 | O | green |
/// | 2 | T | blue |
/// | 3 | S | yellow |
/// | 4 | Z | orange |
/// | 5 | L | purple |
/// | 6 | J | cyan |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Kind at a catalog index, `None` past the end of the catalog.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Catalog index of this kind.
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Color paired with this kind in the catalog.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::RED,
            PieceKind::O => Color::GREEN,
            PieceKind::T => Color::BLUE,
            PieceKind::S => Color::YELLOW,
            PieceKind::Z => Color::ORANGE,
            PieceKind::L => Color::PURPLE,
            PieceKind::J => Color::CYAN,
        }
    }
}

/// Discrete player intents delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks the piece when it cannot descend
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl GameAction {
    /// Every action, in the order a tick applies them.
    pub const TICK_ORDER: [GameAction; 4] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ];
}

/// The set of intents pending for one tick.
///
/// Several intents may be active in the same tick; they are applied in
/// [`GameAction::TICK_ORDER`], each validated on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
    pub soft_drop: bool,
    pub rotate: bool,
}

impl Intents {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_actions(actions: impl IntoIterator<Item = GameAction>) -> Self {
        let mut out = Self::none();
        for action in actions {
            out.insert(action);
        }
        out
    }

    pub fn insert(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left = true,
            GameAction::MoveRight => self.move_right = true,
            GameAction::SoftDrop => self.soft_drop = true,
            GameAction::Rotate => self.rotate = true,
        }
    }

    pub fn contains(&self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left,
            GameAction::MoveRight => self.move_right,
            GameAction::SoftDrop => self.soft_drop,
            GameAction::Rotate => self.rotate,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.move_left || self.move_right || self.soft_drop || self.rotate)
    }

    /// Pending actions in tick order.
    pub fn iter(&self) -> impl Iterator<Item = GameAction> + '_ {
        GameAction::TICK_ORDER
            .into_iter()
            .filter(move |a| self.contains(*a))
    }
}

impl From<GameAction> for Intents {
    fn from(action: GameAction) -> Self {
        Self::from_actions([action])
    }
}

/// Runtime game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub tick_ms: u32,
    /// Randomizer seed; `None` lets the driver derive one from the clock.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT as u16,
            cols: BOARD_WIDTH as u16,
            tick_ms: TICK_MS,
            seed: None,
        }
    }
}

/// Reason a [`GameConfig`] was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBoard { rows: u16, cols: u16 },
    /// The widest catalog shape spans 4 columns.
    TooNarrow { cols: u16 },
    ZeroTick,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard { rows, cols } => {
                write!(f, "board must have at least one cell, got {rows}x{cols}")
            }
            ConfigError::TooNarrow { cols } => {
                write!(f, "board must be at least 4 columns wide, got {cols}")
            }
            ConfigError::ZeroTick => write!(f, "tick interval must be greater than 0ms"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cols < 4 {
            return Err(ConfigError::TooNarrow { cols: self.cols });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}
