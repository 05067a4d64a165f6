//! Quotes panel key handling.

use crossterm::event::{KeyCode, KeyEvent};
use foyer_core::quotes::QuoteCycle;

/// Advances the rotation on the "more wisdom" keys; everything else is
/// ignored.
pub fn handle_key(cycle: &mut QuoteCycle, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ' | 'n') | KeyCode::Right => cycle.advance(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use foyer_core::quotes::QUOTES;

    use super::*;

    #[test]
    fn test_advance_keys_rotate() {
        let mut cycle = QuoteCycle::new();
        handle_key(&mut cycle, KeyEvent::from(KeyCode::Enter));
        assert_eq!(cycle.current(), QUOTES[1]);
        handle_key(&mut cycle, KeyEvent::from(KeyCode::Char('n')));
        assert_eq!(cycle.current(), QUOTES[2]);
    }

    #[test]
    fn test_other_keys_do_not_rotate() {
        let mut cycle = QuoteCycle::new();
        handle_key(&mut cycle, KeyEvent::from(KeyCode::Char('x')));
        handle_key(&mut cycle, KeyEvent::from(KeyCode::Up));
        assert_eq!(cycle.current(), QUOTES[0]);
    }
}
