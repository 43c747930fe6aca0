//! Application state definitions

use super::forms::LoginForm;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Users,
}

/// One user record from the directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub title: Option<String>,
    pub active: bool,
    pub joined_at: DateTime<Utc>,
}

impl User {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(no title)")
    }

    pub fn presence_symbol(&self) -> &'static str {
        if self.active {
            "●"
        } else {
            "○"
        }
    }
}

/// Authenticated session handed back by the directory on sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: Uuid,
    pub email: String,
    pub issued_at: DateTime<Utc>,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Sign-in
    pub login: LoginForm,
    pub session: Option<Session>,

    // Roster data
    pub users: Vec<User>,
    pub users_loading: bool,
    pub users_error: Option<String>,
    pub show_inactive_users: bool,

    // Selection
    pub selected_index: usize,

    // UI state
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Users to display, honoring the inactive-users filter
    pub fn visible_users(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.active || self.show_inactive_users)
            .collect()
    }

    /// Queue an error for the dialog overlay
    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.error_message = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, active: bool) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            title: None,
            active,
            joined_at: Utc::now(),
        }
    }

    #[test]
    fn test_default_state_starts_on_login() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Login);
        assert!(state.session.is_none());
        assert!(state.users.is_empty());
        assert!(!state.users_loading);
    }

    #[test]
    fn test_selection_clamps_at_bounds() {
        let mut state = AppState::default();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down(3);
        state.move_selection_down(3);
        state.move_selection_down(3);
        assert_eq!(state.selected_index, 2);
        state.move_selection_down(0);
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_visible_users_hides_inactive_by_default() {
        let mut state = AppState::default();
        state.users = vec![user("Ada", true), user("Bob", false)];
        let visible = state.visible_users();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Ada");

        state.show_inactive_users = true;
        assert_eq!(state.visible_users().len(), 2);
    }

    #[test]
    fn test_push_and_dismiss_error() {
        let mut state = AppState::default();
        state.push_error("boom");
        assert_eq!(state.error_message.as_deref(), Some("boom"));
        state.dismiss_error();
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_display_title_fallback() {
        let mut u = user("Ada", true);
        assert_eq!(u.display_title(), "(no title)");
        u.title = Some("Engineer".to_string());
        assert_eq!(u.display_title(), "Engineer");
    }
}
