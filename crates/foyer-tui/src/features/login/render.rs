//! Login view rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::Field;
use crate::common::{InputHint, InputLine, centered_panel, render_hints, render_input_line};
use crate::state::AppState;

const PANEL_WIDTH: u16 = 46;
const PANEL_HEIGHT: u16 = 12;

/// Renders the login form, centered.
pub fn render_login(app: &AppState, frame: &mut Frame, area: Rect, attempt_failed: bool) {
    let body = centered_panel(
        frame,
        area,
        "Foyer Login",
        if attempt_failed { Color::Red } else { Color::Cyan },
        PANEL_WIDTH,
        PANEL_HEIGHT,
    );

    let row = |offset: u16| Rect::new(body.x, body.y + offset, body.width, 1);

    // Error banner for the last settled attempt.
    if attempt_failed {
        let banner = Paragraph::new(Line::from(Span::styled(
            "Username or password is incorrect!",
            Style::default().fg(Color::Red),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(banner, row(0));
    }

    render_label(frame, row(1), "Username");
    render_input_line(
        frame,
        row(2),
        &InputLine {
            value: &app.login.username,
            placeholder: "Username",
            masked: false,
            focused: app.login.focus == Field::Username,
        },
    );

    render_label(frame, row(4), "Password");
    render_input_line(
        frame,
        row(5),
        &InputLine {
            value: &app.login.password,
            placeholder: "Password",
            masked: true,
            focused: app.login.focus == Field::Password,
        },
    );

    if let Some(line) = status_line(app, attempt_failed) {
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row(7));
    }

    let hints = [
        InputHint::new("Tab", "switch"),
        InputHint::new("Enter", "login"),
        InputHint::new("Ctrl+C", "quit"),
    ];
    render_hints(frame, row(9), &hints, Color::Cyan);
}

fn render_label(frame: &mut Frame, area: Rect, label: &str) {
    let line = Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// One optional line between the fields and the hints: spinner while an
/// attempt is pending, otherwise the kent/kent easter egg once unlocked.
fn status_line(app: &AppState, attempt_failed: bool) -> Option<Line<'static>> {
    if app.attempt_pending() {
        let spinner = crate::render::spinner_glyph(app.spinner_frame);
        return Some(Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Yellow)),
            Span::styled(" Signing in...", Style::default().fg(Color::Yellow)),
        ]));
    }
    if attempt_failed && app.hint_unlocked && app.config.login_hint {
        return Some(Line::from(Span::styled(
            "Hello, friend! Have you tried logging in with kent/kent already? ;-)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    None
}
