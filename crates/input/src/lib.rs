//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and gathers
//! them into one [`crate::types::Intents`] set per tick.

pub mod collector;
pub mod map;

pub use blockfall_types as types;

pub use collector::IntentCollector;
pub use map::{map_key, should_quit};
