//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a command. Releases and unbound keys map to nothing.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::MoveDown),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::Rotate),

        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('r') => Some(Command::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn movement_keys() {
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('A')] {
            assert_eq!(map_key(press(code)), Some(Command::MoveLeft));
        }
        for code in [KeyCode::Right, KeyCode::Char('L'), KeyCode::Char('d')] {
            assert_eq!(map_key(press(code)), Some(Command::MoveRight));
        }
        for code in [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('S')] {
            assert_eq!(map_key(press(code)), Some(Command::MoveDown));
        }
    }

    #[test]
    fn rotation_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Command::Rotate));
        assert_eq!(map_key(press(KeyCode::Char('W'))), Some(Command::Rotate));
        assert_eq!(map_key(press(KeyCode::Char('k'))), Some(Command::Rotate));
    }

    #[test]
    fn pause_and_restart_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Command::TogglePause));
        assert_eq!(map_key(press(KeyCode::Char('P'))), Some(Command::TogglePause));
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Command::Restart));
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)).is_none());
        assert!(!should_quit(press(KeyCode::Char('x'))));
    }
}
