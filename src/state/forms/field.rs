//! Per-field session state

/// Validation outcome for a single field.
///
/// `Unknown` only exists before the first evaluation; any mutation or submit
/// attempt resolves every field to `Valid` or `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

/// Mutable state for one form field, owned by its session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    /// Current raw input.
    pub value: String,
    /// Set on the first value change or blur, never cleared except by reset.
    pub touched: bool,
    /// Latest violation message, present iff the field currently fails.
    pub error: Option<String>,
    pub validity: Validity,
}

impl FieldState {
    /// Fresh state holding an initial value, untouched and unevaluated.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_untouched_and_unknown() {
        let field = FieldState::default();
        assert!(!field.touched);
        assert!(field.error.is_none());
        assert_eq!(field.validity, Validity::Unknown);
        assert!(!field.is_valid());
    }

    #[test]
    fn test_with_value_keeps_untouched() {
        let field = FieldState::with_value("user@example.com");
        assert_eq!(field.value, "user@example.com");
        assert!(!field.touched);
        assert_eq!(field.validity, Validity::Unknown);
    }
}
