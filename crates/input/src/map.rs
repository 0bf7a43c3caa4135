//! Key mapping from terminal events to input intents.

use crate::types::Difficulty;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key press asks for, before the current screen gives it meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    /// Flip the card under the cursor, or pick the highlighted menu entry.
    Confirm,
    /// Direct difficulty shortcut from the menu.
    Choose(Difficulty),
    NewGame,
}

/// Map keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Intent::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::Move(Direction::Down))
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Confirm),

        // Difficulty shortcuts
        KeyCode::Char('1') => Some(Intent::Choose(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Intent::Choose(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Intent::Choose(Difficulty::Hard)),

        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(Intent::NewGame)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
