//! Key mapping from terminal events to session moves and host commands.

use crate::types::Move;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Commands handled by the host rather than the session input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Stop,
    Restart,
}

/// Map keyboard input to a session move.
///
/// Soft drop is only ever started here; see [`crate::SoftDropLatch`] for the
/// matching stop.
pub fn handle_key_event(key: KeyEvent) -> Option<Move> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Move::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Move::Right)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Move::RotateUp),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Move::RotateDown),

        KeyCode::Char(' ') => Some(Move::SoftDropStart),

        _ => None,
    }
}

/// Map keyboard input to a host command.
pub fn host_command(key: KeyEvent) -> Option<HostCommand> {
    match key.code {
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Esc => Some(HostCommand::Stop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(HostCommand::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
