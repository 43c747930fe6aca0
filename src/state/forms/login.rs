//! Sign-in form: fixed schema plus focus navigation for the view layer

use super::session::FormSession;
use crate::validate::{EmailFormat, FieldSchema, MinLength, Schema};

/// Login fields in display order. The focus cycle appends a buttons row.
pub const LOGIN_FIELDS: &[&str] = &["email", "password"];

/// The sign-in form: a [`FormSession`] over email/password plus the index of
/// the focused row (fields first, buttons row last).
pub struct LoginForm {
    pub session: FormSession,
    pub active_field_index: usize,
}

impl LoginForm {
    /// Build the form, optionally prefilling the email from config.
    pub fn new(prefill_email: Option<&str>) -> Self {
        let mut email = FieldSchema::new("email", "Email").rule(EmailFormat::new());
        if let Some(prefill) = prefill_email {
            email = email.initial_value(prefill);
        }
        let schema = Schema::new(vec![
            email,
            FieldSchema::new("password", "Password")
                .masked()
                .rule(MinLength::new(8)),
        ])
        .expect("login schema field names are unique");
        Self {
            session: FormSession::new(schema),
            active_field_index: 0,
        }
    }

    /// Rows in the focus cycle: the fields plus the buttons row.
    pub fn row_count(&self) -> usize {
        LOGIN_FIELDS.len() + 1
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == LOGIN_FIELDS.len()
    }

    /// Name of the focused field, None on the buttons row.
    pub fn active_field_name(&self) -> Option<&'static str> {
        LOGIN_FIELDS.get(self.active_field_index).copied()
    }

    /// Move focus to the next row, blurring the field being left so its
    /// violation becomes visible (validate-on-leave).
    pub fn next_field(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.session.blur_field(name);
        }
        self.active_field_index = (self.active_field_index + 1) % self.row_count();
    }

    /// Move focus to the previous row, blurring the field being left.
    pub fn prev_field(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.session.blur_field(name);
        }
        if self.active_field_index == 0 {
            self.active_field_index = self.row_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Append a character to the focused field. Routes through the session
    /// so every keystroke re-validates.
    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.active_field_name() {
            let mut value = self
                .session
                .field(name)
                .map(|f| f.value.clone())
                .unwrap_or_default();
            value.push(c);
            self.session.set_field_value(name, value);
        }
    }

    /// Remove the last character from the focused field.
    pub fn backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            let mut value = self
                .session
                .field(name)
                .map(|f| f.value.clone())
                .unwrap_or_default();
            if value.pop().is_some() {
                self.session.set_field_value(name, value);
            }
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(None)
    }
}
