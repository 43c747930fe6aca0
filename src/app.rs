//! Application state and core logic

use crate::backend::DirectoryClient;
use crate::config::TuiConfig;
use crate::state::{AppState, LoginForm, Session, SubmitOutcome, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Directory backend the app talks to
    pub directory: Box<dyn DirectoryClient>,
    /// Loaded user configuration, saved back on exit
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance over a directory client
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(directory: Box<dyn DirectoryClient>, config: TuiConfig) -> Self {
        let mut state = AppState::default();
        state.show_inactive_users = config.show_inactive_users.unwrap_or(false);
        state.login = LoginForm::new(config.last_email.as_deref());

        Self {
            state,
            directory,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // The error dialog captures input until dismissed
        if self.state.error_message.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Login => self.handle_login_key(key).await,
            View::Users => self.handle_users_key(key).await,
        }
        Ok(())
    }

    /// Handle keys on the sign-in screen
    async fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.login.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.login.prev_field(),
            KeyCode::Enter => self.submit_login().await,
            KeyCode::Esc => {
                self.state.login.session.reset();
                self.state.login.active_field_index = 0;
            }
            KeyCode::Backspace => self.state.login.backspace(),
            KeyCode::Char(c) => self.state.login.input_char(c),
            _ => {}
        }
    }

    /// Run the sign-in submission through the form session
    async fn submit_login(&mut self) {
        let mut issued: Option<Session> = None;
        let issued_ref = &mut issued;
        let directory = &mut self.directory;

        let outcome = self
            .state
            .login
            .session
            .attempt_submit(|values| async move {
                let email = values.get("email").cloned().unwrap_or_default();
                let password = values.get("password").cloned().unwrap_or_default();
                *issued_ref = Some(directory.login(&email, &password).await?);
                Ok(())
            })
            .await;

        match outcome {
            SubmitOutcome::Completed => {
                let Some(session) = issued else {
                    return;
                };
                tracing::info!(
                    "session issued for {} (submit #{})",
                    session.email,
                    self.state.login.session.submit_count()
                );
                self.state.status_message = Some(format!("Signed in as {}", session.email));
                self.config.last_email = Some(session.email.clone());
                self.state.session = Some(session);
                self.state.current_view = View::Users;
                self.load_users().await;
            }
            SubmitOutcome::Failed(err) => {
                // Submission failure is a caller concern; field errors are
                // left alone.
                self.state.push_error(format!("Sign-in failed: {err}"));
            }
            SubmitOutcome::Invalid => {
                self.state.status_message = Some("Fix the highlighted fields".to_string());
            }
            SubmitOutcome::AlreadySubmitting => {}
        }
    }

    /// Fetch the roster, recording either the items or the failure
    pub async fn load_users(&mut self) {
        self.state.users_loading = true;
        self.state.users_error = None;
        self.state.selected_index = 0;

        match self.directory.list_users().await {
            Ok(users) => {
                tracing::debug!("loaded {} users", users.len());
                self.state.users = users;
            }
            Err(err) => {
                self.state.users.clear();
                self.state.users_error = Some(err.to_string());
            }
        }
        self.state.users_loading = false;
    }

    /// Handle keys on the roster screen
    async fn handle_users_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.state.visible_users().len();
                self.state.move_selection_down(max);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('r') => self.load_users().await,
            KeyCode::Char('a') => {
                self.state.show_inactive_users = !self.state.show_inactive_users;
                self.state.selected_index = 0;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.logout(),
            _ => {}
        }
    }

    /// Drop the session and return to a fresh sign-in form
    fn logout(&mut self) {
        self.state.session = None;
        self.state.users.clear();
        self.state.users_error = None;
        self.state.login.session.reset();
        self.state.login.active_field_index = 0;
        self.state.current_view = View::Login;
        self.state.status_message = Some("Signed out".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockDirectoryClient;
    use crate::state::{Session, User};
    use chrono::Utc;
    use uuid::Uuid;

    fn session_for(email: &str) -> Session {
        Session {
            token: Uuid::new_v4(),
            email: email.to_string(),
            issued_at: Utc::now(),
        }
    }

    fn user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            title: None,
            active: true,
            joined_at: Utc::now(),
        }
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code)).await.unwrap();
    }

    mod sign_in {
        use super::*;

        #[tokio::test]
        async fn test_successful_sign_in_loads_roster() {
            let mut mock = MockDirectoryClient::new();
            mock.expect_login()
                .times(1)
                .returning(|email, _| Ok(super::session_for(email)));
            mock.expect_list_users()
                .times(1)
                .returning(|| Ok(vec![super::user("Ada"), super::user("Bob")]));

            let mut app = App::new(Box::new(mock), TuiConfig::default());
            type_str(&mut app, "user@example.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "password123").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::Users);
            assert!(app.state.session.is_some());
            assert_eq!(app.state.users.len(), 2);
            assert!(!app.state.login.session.submitting());
            assert_eq!(
                app.config.last_email.as_deref(),
                Some("user@example.com")
            );
        }

        #[tokio::test]
        async fn test_invalid_form_never_calls_backend() {
            let mut mock = MockDirectoryClient::new();
            mock.expect_login().times(0);

            let mut app = App::new(Box::new(mock), TuiConfig::default());
            type_str(&mut app, "not-an-email").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::Login);
            // The attempt surfaced every field's error.
            assert!(app.state.login.session.visible_error("email").is_some());
            assert!(app.state.login.session.visible_error("password").is_some());
        }

        #[tokio::test]
        async fn test_rejected_credentials_surface_dialog_and_release_flag() {
            let mut mock = MockDirectoryClient::new();
            mock.expect_login()
                .times(1)
                .returning(|_, _| Err(anyhow::anyhow!("Invalid email or password")));

            let mut app = App::new(Box::new(mock), TuiConfig::default());
            type_str(&mut app, "user@example.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "password123").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::Login);
            assert!(app.state.session.is_none());
            assert!(!app.state.login.session.submitting());
            let message = app.state.error_message.clone().unwrap();
            assert!(message.contains("Invalid email or password"));
            // Field-level state is untouched by a submission failure.
            assert!(app.state.login.session.is_valid());

            // Dialog swallows input until dismissed.
            press(&mut app, KeyCode::Char('x')).await;
            assert!(app.state.error_message.is_some());
            press(&mut app, KeyCode::Enter).await;
            assert!(app.state.error_message.is_none());
        }

        #[tokio::test]
        async fn test_prefilled_email_from_config() {
            let mut mock = MockDirectoryClient::new();
            mock.expect_login().times(0);
            let config = TuiConfig {
                last_email: Some("saved@example.com".to_string()),
                ..Default::default()
            };
            let app = App::new(Box::new(mock), config);
            assert_eq!(
                app.state.login.session.field("email").unwrap().value,
                "saved@example.com"
            );
        }

        #[tokio::test]
        async fn test_esc_resets_the_form() {
            let mut mock = MockDirectoryClient::new();
            mock.expect_login().times(0);

            let mut app = App::new(Box::new(mock), TuiConfig::default());
            type_str(&mut app, "half-typed").await;
            press(&mut app, KeyCode::Esc).await;

            assert_eq!(app.state.login.session.field("email").unwrap().value, "");
            assert!(app.state.login.session.visible_error("email").is_none());
        }
    }

    mod roster {
        use super::*;

        async fn signed_in_app(mut mock: MockDirectoryClient) -> App {
            mock.expect_login()
                .returning(|email, _| Ok(super::session_for(email)));
            let mut app = App::new(Box::new(mock), TuiConfig::default());
            type_str(&mut app, "user@example.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "password123").await;
            press(&mut app, KeyCode::Enter).await;
            app
        }

        #[tokio::test]
        async fn test_fetch_failure_shows_banner_not_dialog() {
            let mut mock = MockDirectoryClient::new();
            mock.expect_list_users()
                .times(1)
                .returning(|| Err(anyhow::anyhow!("service unavailable")));

            let app = signed_in_app(mock).await;
            assert_eq!(app.state.current_view, View::Users);
            assert_eq!(
                app.state.users_error.as_deref(),
                Some("service unavailable")
            );
            assert!(app.state.users.is_empty());
            assert!(!app.state.users_loading);
        }

        #[tokio::test]
        async fn test_reload_retries_after_failure() {
            let mut mock = MockDirectoryClient::new();
            let mut attempts = 0u32;
            mock.expect_list_users().times(2).returning(move || {
                attempts += 1;
                if attempts == 1 {
                    Err(anyhow::anyhow!("service unavailable"))
                } else {
                    Ok(vec![super::user("Ada")])
                }
            });

            let mut app = signed_in_app(mock).await;
            assert!(app.state.users_error.is_some());
            press(&mut app, KeyCode::Char('r')).await;
            assert!(app.state.users_error.is_none());
            assert_eq!(app.state.users.len(), 1);
        }

        #[tokio::test]
        async fn test_selection_and_logout() {
            let mut mock = MockDirectoryClient::new();
            mock.expect_list_users()
                .returning(|| Ok(vec![super::user("Ada"), super::user("Bob")]));

            let mut app = signed_in_app(mock).await;
            press(&mut app, KeyCode::Char('j')).await;
            assert_eq!(app.state.selected_index, 1);
            press(&mut app, KeyCode::Char('j')).await;
            assert_eq!(app.state.selected_index, 1);

            press(&mut app, KeyCode::Char('q')).await;
            assert_eq!(app.state.current_view, View::Login);
            assert!(app.state.session.is_none());
            assert!(app.state.users.is_empty());
        }
    }

    #[tokio::test]
    async fn test_ctrl_c_requests_quit() {
        let mut mock = MockDirectoryClient::new();
        mock.expect_login().times(0);
        let mut app = App::new(Box::new(mock), TuiConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(app.should_quit());
    }
}
