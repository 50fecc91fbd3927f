//! Key mapping from terminal events to game input.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a key press can ask for
///
/// Only `Command` reaches the core's command interface; the rest are
/// frontend concerns (scene switch, instant drop, reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    HardDrop,
    Start,
    Restart,
}

/// Map keyboard input to key actions.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyAction::Command(Command::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyAction::Command(Command::MoveRight))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyAction::Command(Command::SoftDrop))
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(KeyAction::Command(Command::RotateCw)),

        // Actions
        KeyCode::Char(' ') => Some(KeyAction::HardDrop),
        KeyCode::Enter => Some(KeyAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
