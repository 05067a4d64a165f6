//! Login form key handling.
//!
//! Pure field editing and focus movement; a submission is reported upward
//! for the reducer to act on. Nothing here touches the session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::LoginFormState;

/// Outcome of a key press on the login form.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginKeyResult {
    /// Key consumed (or ignored); nothing to do.
    Handled,
    /// The user submitted the form with the given credentials.
    Submit { username: String, password: String },
}

pub fn handle_key(form: &mut LoginFormState, key: KeyEvent) -> LoginKeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => LoginKeyResult::Submit {
            username: form.username.clone(),
            password: form.password.clone(),
        },
        KeyCode::Tab | KeyCode::Down => {
            form.focus = form.focus.next();
            LoginKeyResult::Handled
        }
        KeyCode::BackTab | KeyCode::Up => {
            // Two fields, so previous and next coincide.
            form.focus = form.focus.next();
            LoginKeyResult::Handled
        }
        KeyCode::Backspace => {
            form.focused_mut().pop();
            LoginKeyResult::Handled
        }
        KeyCode::Char(c) if !ctrl => {
            form.focused_mut().push(c);
            LoginKeyResult::Handled
        }
        _ => LoginKeyResult::Handled,
    }
}
