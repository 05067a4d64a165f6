//! Shared rendering utilities for the portal views.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_start_with_ellipsis;

/// Calculates a centered panel area, clears it, and draws the border with a
/// title. Returns the inner area.
pub fn centered_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    width: u16,
    height: u16,
) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let panel = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, panel);

    Rect::new(
        panel.x + 2,
        panel.y + 1,
        panel.width.saturating_sub(4),
        panel.height.saturating_sub(2),
    )
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a line of keyboard hints, centered.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Configuration for rendering a labeled input line: "> <text>█".
pub struct InputLine<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
    /// Replaces every character with `•` when set (password fields).
    pub masked: bool,
    pub focused: bool,
}

/// Renders one form input line. The block cursor is drawn only on the
/// focused field.
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &InputLine<'_>) {
    let prompt = "> ";
    let max_text_width = area.width.saturating_sub(prompt.len() as u16 + 1) as usize;

    let shown: String = if input.masked {
        "•".repeat(input.value.chars().count())
    } else {
        input.value.to_string()
    };

    let prompt_color = if input.focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let mut spans = vec![Span::styled(prompt, Style::default().fg(prompt_color))];

    if shown.is_empty() {
        if input.focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        spans.push(Span::styled(
            input.placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            truncate_start_with_ellipsis(&shown, max_text_width),
            Style::default().fg(Color::White),
        ));
        if input.focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
