//! Key event decoding.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::InputAction;

/// Map a key event to an input action. Unhandled keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c' | 'd'), KeyModifiers::CONTROL) => Some(InputAction::Quit),
        (KeyCode::Char(_), m) if m.contains(KeyModifiers::CONTROL) => None,
        (KeyCode::Char(c), _) => Some(InputAction::Insert(c)),
        (KeyCode::Enter, _) => Some(InputAction::Submit),
        (KeyCode::Backspace, _) => Some(InputAction::Backspace),
        (KeyCode::Up, _) => Some(InputAction::HistoryOlder),
        (KeyCode::Down, _) => Some(InputAction::HistoryNewer),
        (KeyCode::Tab, _) => Some(InputAction::Complete),
        _ => None,
    }
}
