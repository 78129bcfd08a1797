//! Key and mouse mapping from terminal events to player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Cursor movement direction on the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move the grid cursor
    Move(Direction),
    /// Flip the card under the cursor, or play again after a win
    Confirm,
    /// Deal a new board
    NewGame,
    /// Switch between light and dark themes
    ToggleTheme,
    /// Raw mouse click at a terminal position
    Click { column: u16, row: u16 },
}

/// Map keyboard input to player actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputAction::Move(Direction::Down))
        }

        // Flip / play again
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputAction::Confirm),

        // New game
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(InputAction::NewGame)
        }

        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputAction::ToggleTheme),

        _ => None,
    }
}

/// Map a mouse event to a click action (left button press only).
pub fn handle_mouse_event(event: MouseEvent) -> Option<InputAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputAction::Click {
            column: event.column,
            row: event.row,
        }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
