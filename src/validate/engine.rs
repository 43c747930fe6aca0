//! Schema definition and the violation evaluator

use super::rules::Rule;
use std::collections::HashMap;
use thiserror::Error;

/// Schema misconfiguration, detected when the schema is constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate field name: {0}")]
    DuplicateField(String),
    #[error("field name must not be empty")]
    EmptyFieldName,
}

/// One named field in a form schema: an ordered rule list plus the
/// presentation metadata the view layer needs (label, masking).
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    pub initial_value: String,
    pub masked: bool,
    rules: Vec<Box<dyn Rule>>,
}

impl FieldSchema {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            initial_value: String::new(),
            masked: false,
            rules: Vec::new(),
        }
    }

    /// Append a rule. Declared order is evaluation order.
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Render the value as a string of bullets instead of plain text.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

/// A validated set of field schemas with unique, non-empty names.
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    /// Build a schema, rejecting duplicate or empty field names.
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        let mut seen = std::collections::HashSet::new();
        for field in &fields {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Evaluate a value set against a schema.
///
/// Returns the first failing rule's message per field; fields that pass all
/// their rules are absent from the result. Values for names the schema does
/// not know are ignored, and schema fields missing from `values` are checked
/// as the empty string. Pure function of its inputs.
pub fn evaluate(schema: &Schema, values: &HashMap<String, String>) -> HashMap<String, String> {
    let mut violations = HashMap::new();
    for field in schema.fields() {
        let value = values.get(&field.name).map(String::as_str).unwrap_or("");
        for rule in field.rules() {
            if !rule.check(value) {
                violations.insert(field.name.clone(), rule.message().to_string());
                break;
            }
        }
    }
    violations
}
