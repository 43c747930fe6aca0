//! Schema-driven field validation
//!
//! A stateless rule engine: a [`Schema`] names the fields of a form and the
//! ordered constraints on each, and [`evaluate`] maps a raw value set to the
//! violations it contains. All form state lives in the session layer.

mod engine;
mod rules;

pub use engine::{evaluate, FieldSchema, Schema, SchemaError};
pub use rules::{EmailFormat, MinLength, Required, Rule};
