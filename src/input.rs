//! Input handling for the game screen.
//!
//! Maps raw key events to UI-agnostic game actions.

use crate::game::{logic, GameInput, GameSession};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Result of handling one key event.
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Player quit.
    Quit,
}

/// Dispatch a key event to the session.
pub fn handle_key<R: Rng>(key: KeyEvent, session: &mut GameSession, rng: &mut R) -> InputResult {
    let input = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Flap,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Reset,
        _ => GameInput::Other,
    };
    logic::process_input(session, input, rng);
    InputResult::Continue
}
