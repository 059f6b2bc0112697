//! Key mapping from terminal events and directional buttons to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Enter restarts only once the game is over; otherwise it is ignored.
pub fn map_key(key: KeyEvent, game_over: bool) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::MoveDown),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePause),
        KeyCode::Enter if game_over => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should leave the game (back to the host menu).
pub fn should_leave(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// On-screen controls shown on small screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionalButton {
    Up,
    Down,
    /// The `>` button
    Enter,
    /// The `R` button
    Return,
}

/// What a directional button asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonCommand {
    Game(GameAction),
    Leave,
}

pub fn map_button(button: DirectionalButton) -> ButtonCommand {
    match button {
        DirectionalButton::Up => ButtonCommand::Game(GameAction::MoveLeft),
        DirectionalButton::Down => ButtonCommand::Game(GameAction::MoveRight),
        DirectionalButton::Enter => ButtonCommand::Game(GameAction::Rotate),
        DirectionalButton::Return => ButtonCommand::Leave,
    }
}
