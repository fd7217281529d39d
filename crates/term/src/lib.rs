//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board and active piece are
//! drawn into a framebuffer, which is then flushed to the terminal.
//!
//! - [`game_view`] is pure and reads core state only; it never mutates it
//! - [`renderer`] owns the terminal and performs all I/O

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
