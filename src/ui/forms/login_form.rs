//! Sign-in form view

use super::field_renderer::{draw_field, draw_field_error, FIELD_HEIGHT};
use crate::app::App;
use crate::backend::FIXTURE_PASSWORD;
use crate::state::LOGIN_FIELDS;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FORM_WIDTH: u16 = 48;

/// Draw the sign-in screen
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.login;
    let session = &form.session;

    // Title + (field box + error line) per field + button row + demo hint
    let field_rows = LOGIN_FIELDS.len() as u16 * (FIELD_HEIGHT + 1);
    let form_height = 2 + field_rows + BUTTON_HEIGHT + 2;
    let column = centered_column(area, FORM_WIDTH, form_height);

    let mut constraints = vec![Constraint::Length(2)]; // Title
    for _ in LOGIN_FIELDS {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        constraints.push(Constraint::Length(1)); // Error line
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(2)); // Demo hint
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    let title = Paragraph::new(Line::from(Span::styled(
        "Sign in to Roster",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    for (idx, name) in LOGIN_FIELDS.iter().enumerate() {
        let Some(schema_field) = session.schema().field(name) else {
            continue;
        };
        let Some(state) = session.field(name) else {
            continue;
        };
        let error = session.visible_error(name);
        let is_active = form.active_field_index == idx;

        draw_field(
            frame,
            chunks[1 + idx * 2],
            &schema_field.label,
            &state.value,
            schema_field.masked,
            is_active,
            error.is_some(),
        );
        draw_field_error(frame, chunks[2 + idx * 2], error);
    }

    // Submit stays visible but disabled while a submission is in flight.
    let button_area = chunks[1 + LOGIN_FIELDS.len() * 2];
    let label = if session.submitting() {
        "Signing in..."
    } else {
        "Sign in"
    };
    render_button(
        frame,
        button_area,
        label,
        form.is_buttons_row_active(),
        !session.submitting(),
    );

    let hint = Paragraph::new(Line::from(Span::styled(
        format!("Demo accounts sign in with \"{FIXTURE_PASSWORD}\""),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, chunks[2 + LOGIN_FIELDS.len() * 2]);
}

/// Center a fixed-size column in the available area
fn centered_column(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
