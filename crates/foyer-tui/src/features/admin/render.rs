//! Admin panel rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::{InputHint, centered_panel, render_hints};

const PANEL_WIDTH: u16 = 40;
const PANEL_HEIGHT: u16 = 7;

/// Renders the admin panel for the given identity.
pub fn render_admin(frame: &mut Frame, area: Rect, identity: &str) {
    let body = centered_panel(
        frame,
        area,
        "Admin Panel",
        Color::Green,
        PANEL_WIDTH,
        PANEL_HEIGHT,
    );

    let welcome = Line::from(vec![
        Span::raw("Welcome "),
        Span::styled(
            identity.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let welcome_area = Rect::new(body.x, body.y + 1, body.width, 1);
    frame.render_widget(
        Paragraph::new(welcome).alignment(Alignment::Center),
        welcome_area,
    );

    let hints = [InputHint::new("Ctrl+C", "quit")];
    let hints_area = Rect::new(body.x, body.y + 3, body.width, 1);
    render_hints(frame, hints_area, &hints, Color::Green);
}
