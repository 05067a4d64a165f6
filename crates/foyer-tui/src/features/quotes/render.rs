//! Quotes panel rendering.

use foyer_core::quotes::{ATTRIBUTION, QuoteCycle};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::common::{InputHint, centered_panel, render_hints};

const PANEL_WIDTH: u16 = 60;
const PANEL_HEIGHT: u16 = 10;

/// Renders the current quote as a blockquote with attribution.
pub fn render_quotes(frame: &mut Frame, area: Rect, cycle: &QuoteCycle) {
    let body = centered_panel(
        frame,
        area,
        "Wisdom",
        Color::Magenta,
        PANEL_WIDTH,
        PANEL_HEIGHT,
    );

    let quote = Paragraph::new(Line::from(Span::styled(
        format!("“{}”", cycle.current()),
        Style::default().add_modifier(Modifier::ITALIC),
    )))
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center);
    let quote_area = Rect::new(body.x, body.y + 1, body.width, 4);
    frame.render_widget(quote, quote_area);

    let attribution = Paragraph::new(Line::from(Span::styled(
        format!("— {ATTRIBUTION}"),
        Style::default().fg(Color::Magenta),
    )))
    .alignment(Alignment::Right);
    let attribution_area = Rect::new(body.x, body.y + 5, body.width, 1);
    frame.render_widget(attribution, attribution_area);

    let hints = [
        InputHint::new("Enter", "more wisdom"),
        InputHint::new("Ctrl+C", "quit"),
    ];
    let hints_area = Rect::new(body.x, body.y + 7, body.width, 1);
    render_hints(frame, hints_area, &hints, Color::Magenta);
}
