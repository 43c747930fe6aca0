//! Roster list view: loading skeleton, error banner, user list

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Placeholder rows shown while the roster is loading
const SKELETON_ROWS: usize = 6;

/// Draw the roster view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Team directory ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.state.users_loading {
        draw_skeleton(frame, inner);
        return;
    }

    if let Some(error) = &app.state.users_error {
        draw_error_banner(frame, inner, error);
        return;
    }

    let users = app.state.visible_users();
    if users.is_empty() {
        let empty = Paragraph::new("No users to show")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = users
        .iter()
        .map(|user| {
            let presence_color = if user.active {
                Color::Green
            } else {
                Color::DarkGray
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", user.presence_symbol()),
                    Style::default().fg(presence_color),
                ),
                Span::styled(
                    format!("{:<24}", user.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<20}", user.display_title()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(&user.email, Style::default().fg(Color::Blue)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");

    // Stateful render keeps the selected row in view as the list scrolls.
    let mut list_state = ListState::default().with_selected(Some(app.state.selected_index));
    frame.render_stateful_widget(list, inner, &mut list_state);
}

/// Gray placeholder rows while the fetch is in flight
fn draw_skeleton(frame: &mut Frame, area: Rect) {
    let width = (area.width as usize).saturating_sub(4).min(48);
    let lines: Vec<Line> = (0..SKELETON_ROWS)
        .map(|_| {
            Line::from(Span::styled(
                "▒".repeat(width),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Red banner with a retry hint when the fetch failed
fn draw_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Could not load users: {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(banner, area);
}
