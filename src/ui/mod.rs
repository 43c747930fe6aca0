//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod users;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let content_area = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Login => forms::draw_login(frame, content_area, app),
        View::Users => users::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Error dialog overlays whatever view is active
    if let Some(message) = &app.state.error_message {
        components::render_error_dialog(frame, message);
    }
}
