//! Top-level render dispatch.
//!
//! Every frame renders from scratch: the router picks the view from the
//! current session state and the matching feature paints the whole area.

use ratatui::Frame;

use crate::router::{View, route};
use crate::state::AppState;
use crate::{admin, login, quotes};

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Spinner speed divisor (render frames per spinner frame).
const SPINNER_SPEED_DIVISOR: usize = 3;

/// Glyph for the current spinner animation frame.
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[(frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()]
}

/// Renders the whole screen for the current state.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match route(&app.session) {
        View::Quotes => quotes::render_quotes(frame, area, &app.quotes),
        View::Admin { identity } => admin::render_admin(frame, area, identity),
        View::Login { attempt_failed } => login::render_login(app, frame, area, attempt_failed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles_through_all_frames() {
        let mut seen = Vec::new();
        for frame in 0..(SPINNER_FRAMES.len() * SPINNER_SPEED_DIVISOR) {
            let glyph = spinner_glyph(frame);
            if seen.last() != Some(&glyph) {
                seen.push(glyph);
            }
        }
        assert_eq!(seen, SPINNER_FRAMES);
    }
}
