//! Built-in constraint rules

/// A single constraint over a field's raw value.
///
/// Rules are stored as trait objects in a schema, so new rule kinds can be
/// added without touching the engine.
pub trait Rule: Send + Sync {
    /// Returns true when the value satisfies the constraint.
    fn check(&self, value: &str) -> bool;

    /// The violation message reported when the check fails.
    fn message(&self) -> &str;
}

/// Syntactic email-shape constraint.
///
/// This is deliberately loose: one `@`, a non-empty local part, and a domain
/// with a dot separating non-empty labels. Real address verification belongs
/// to the backend.
pub struct EmailFormat {
    message: String,
}

impl EmailFormat {
    pub fn new() -> Self {
        Self {
            message: "Please enter a valid email".to_string(),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for EmailFormat {
    fn check(&self, value: &str) -> bool {
        if value.chars().any(char::is_whitespace) {
            return false;
        }
        let mut parts = value.splitn(2, '@');
        let local = parts.next().unwrap_or("");
        let Some(domain) = parts.next() else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Minimum-length constraint, counted in characters rather than bytes.
pub struct MinLength {
    min: usize,
    message: String,
}

impl MinLength {
    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: format!("Must be at least {min} characters"),
        }
    }

    pub fn with_message(min: usize, message: impl Into<String>) -> Self {
        Self {
            min,
            message: message.into(),
        }
    }
}

impl Rule for MinLength {
    fn check(&self, value: &str) -> bool {
        value.chars().count() >= self.min
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Non-empty constraint (whitespace-only counts as empty).
pub struct Required {
    message: String,
}

impl Required {
    pub fn new() -> Self {
        Self {
            message: "This field is required".to_string(),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Required {
    fn check(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }

    fn message(&self) -> &str {
        &self.message
    }
}
