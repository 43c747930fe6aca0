//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field box (borders + content)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a single-line form field.
///
/// Masked fields render bullets instead of the raw value. An error turns the
/// border red; the message itself is drawn by the caller below the box.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    masked: bool,
    is_active: bool,
    has_error: bool,
) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw a field's violation message on the line under its box
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    let Some(message) = error else {
        return;
    };
    let line = Paragraph::new(Line::from(Span::styled(
        format!("  {message}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(line, area);
}
