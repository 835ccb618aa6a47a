//! Key mapping from terminal events to game commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Apply a game action directly.
    Action(GameAction),
    /// Open the board-size prompt.
    ChangeSize,
}

/// Map keyboard input to game commands.
///
/// Queen moves come from mouse clicks only; keys drive the toolbar commands.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyCommand::ChangeSize),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::Action(GameAction::Reset)),
        KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(KeyCommand::Action(GameAction::RandomizeQueen))
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(KeyCommand::Action(GameAction::RandomizeBlock))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Callers route keys to an open size prompt first; there `Esc` means cancel.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Ctrl-C quits even while the size prompt is open.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_toolbar_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(KeyCommand::ChangeSize)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(KeyCommand::Action(GameAction::Reset))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(KeyCommand::Action(GameAction::RandomizeQueen))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('B'))),
            Some(KeyCommand::Action(GameAction::RandomizeBlock))
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('7'))), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(is_interrupt(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt(KeyEvent::from(KeyCode::Esc)));
    }
}
