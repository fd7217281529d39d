//! Per-tick intent collection.
//!
//! The game polls "which directions are pressed" once per tick. Terminals only
//! deliver press/repeat events (key releases are rare), so a key counts as
//! pressed for the tick in which a press or auto-repeat for it arrived.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{GameAction, Intents};

/// Accumulates key events between ticks.
#[derive(Debug, Clone, Default)]
pub struct IntentCollector {
    pending: Intents,
}

impl IntentCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Returns the mapped action, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let action = map_key(key)?;
        self.pending.insert(action);
        Some(action)
    }

    /// Intents gathered so far, without resetting.
    pub fn pending(&self) -> Intents {
        self.pending
    }

    /// Hand over this tick's intents and start a new window.
    pub fn take(&mut self) -> Intents {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn collects_several_intents_in_one_tick() {
        let mut c = IntentCollector::new();
        c.handle_key_event(key(KeyCode::Up, KeyEventKind::Press));
        c.handle_key_event(key(KeyCode::Left, KeyEventKind::Press));
        c.handle_key_event(key(KeyCode::Left, KeyEventKind::Repeat));

        let intents = c.take();
        assert!(intents.move_left);
        assert!(intents.rotate);
        assert!(!intents.move_right);
        assert!(!intents.soft_drop);
    }

    #[test]
    fn take_resets_window() {
        let mut c = IntentCollector::new();
        c.handle_key_event(key(KeyCode::Down, KeyEventKind::Press));
        assert!(c.take().soft_drop);
        assert!(c.take().is_empty());
    }

    #[test]
    fn release_and_unmapped_keys_are_ignored() {
        let mut c = IntentCollector::new();
        assert_eq!(c.handle_key_event(key(KeyCode::Right, KeyEventKind::Release)), None);
        assert_eq!(c.handle_key_event(key(KeyCode::Char('x'), KeyEventKind::Press)), None);
        assert!(c.pending().is_empty());
    }
}
