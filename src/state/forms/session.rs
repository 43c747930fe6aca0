//! Form session controller
//!
//! Owns mutable per-field state over a validation [`Schema`], re-runs the rule
//! engine on every mutation, and gates submission on full-form validity with
//! at most one submission in flight.

use super::field::{FieldState, Validity};
use crate::validate::{evaluate, Schema};
use std::collections::HashMap;
use std::future::Future;

/// Result of the submit gate: either the clean value set to hand to the
/// submit callback, or the reason no callback will run.
#[derive(Debug)]
pub enum SubmitGate {
    Ready(HashMap<String, String>),
    Invalid,
    AlreadySubmitting,
}

/// Outcome of a full [`FormSession::attempt_submit`] round trip.
#[derive(Debug)]
pub enum SubmitOutcome {
    Completed,
    /// The injected callback failed. Field errors are untouched; this is the
    /// caller's concern, not a validation concern.
    Failed(anyhow::Error),
    Invalid,
    AlreadySubmitting,
}

/// One live form: field states keyed by schema name plus submission flags.
///
/// The whole session resets together; individual fields are never destroyed.
pub struct FormSession {
    schema: Schema,
    fields: HashMap<String, FieldState>,
    submitting: bool,
    submit_attempted: bool,
    submit_count: u64,
}

impl FormSession {
    /// Start a session with every field at its schema initial value,
    /// untouched and unevaluated.
    pub fn new(schema: Schema) -> Self {
        let fields = schema
            .fields()
            .iter()
            .map(|f| (f.name.clone(), FieldState::with_value(&f.initial_value)))
            .collect();
        Self {
            schema,
            fields,
            submitting: false,
            submit_attempted: false,
            submit_count: 0,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Current raw value set, keyed by field name.
    pub fn values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value.clone()))
            .collect()
    }

    /// Aggregate validity: every field evaluated and valid.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldState::is_valid)
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Number of submit callback invocations so far.
    pub fn submit_count(&self) -> u64 {
        self.submit_count
    }

    /// The violation to display for a field, honoring the visibility policy:
    /// errors surface only once the field is touched or a submit was
    /// attempted. Validity itself is computed regardless.
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        let field = self.fields.get(name)?;
        if field.touched || self.submit_attempted {
            field.error.as_deref()
        } else {
            None
        }
    }

    /// Update a field's value, mark it touched, and re-validate the whole
    /// value set. Unknown names are logged and ignored.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) {
        let Some(field) = self.fields.get_mut(name) else {
            tracing::warn!("set_field_value on unknown field: {name}");
            return;
        };
        field.value = value.into();
        field.touched = true;
        self.revalidate();
    }

    /// Mark a field touched without changing its value, so its current
    /// violation (if any) becomes visible.
    pub fn blur_field(&mut self, name: &str) {
        let Some(field) = self.fields.get_mut(name) else {
            tracing::warn!("blur_field on unknown field: {name}");
            return;
        };
        field.touched = true;
        self.revalidate();
    }

    /// Gate a submit attempt.
    ///
    /// Touches every field so all outstanding errors surface, re-validates,
    /// and either rejects (already submitting, or invalid) or marks the
    /// session submitting and returns the clean values. A `Ready` result
    /// must be paired with [`finish_submit`](Self::finish_submit) once the
    /// submission settles, success or failure.
    pub fn begin_submit(&mut self) -> SubmitGate {
        if self.submitting {
            return SubmitGate::AlreadySubmitting;
        }
        self.submit_attempted = true;
        for field in self.fields.values_mut() {
            field.touched = true;
        }
        self.revalidate();
        if !self.is_valid() {
            return SubmitGate::Invalid;
        }
        self.submitting = true;
        self.submit_count += 1;
        SubmitGate::Ready(self.values())
    }

    /// Clear the in-flight flag after the submission settles.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Run the full submit lifecycle around an injected callback.
    ///
    /// The submitting flag is cleared on every exit path; a callback failure
    /// is returned as [`SubmitOutcome::Failed`] without touching field errors.
    pub async fn attempt_submit<F, Fut>(&mut self, submit: F) -> SubmitOutcome
    where
        F: FnOnce(HashMap<String, String>) -> Fut,
        Fut: Future<Output = anyhow::Result<()>>,
    {
        let values = match self.begin_submit() {
            SubmitGate::Ready(values) => values,
            SubmitGate::Invalid => return SubmitOutcome::Invalid,
            SubmitGate::AlreadySubmitting => return SubmitOutcome::AlreadySubmitting,
        };
        let result = submit(values).await;
        self.finish_submit();
        match result {
            Ok(()) => SubmitOutcome::Completed,
            Err(err) => SubmitOutcome::Failed(err),
        }
    }

    /// Restore every field to its initial value and drop all session flags.
    /// `submit_count` is a lifetime counter and survives resets.
    pub fn reset(&mut self) {
        for schema_field in self.schema.fields() {
            if let Some(field) = self.fields.get_mut(&schema_field.name) {
                *field = FieldState::with_value(&schema_field.initial_value);
            }
        }
        self.submitting = false;
        self.submit_attempted = false;
    }

    fn revalidate(&mut self) {
        // The whole value set goes to the engine on every change so that
        // cross-field rules stay correct if a schema ever carries them.
        let violations = evaluate(&self.schema, &self.values());
        for (name, field) in &mut self.fields {
            match violations.get(name) {
                Some(message) => {
                    field.error = Some(message.clone());
                    field.validity = Validity::Invalid;
                }
                None => {
                    field.error = None;
                    field.validity = Validity::Valid;
                }
            }
        }
    }
}
