//! Form domain layer
//!
//! Session state and submission gating over the `validate` rule engine.

mod field;
mod login;
mod session;

pub use field::{FieldState, Validity};
pub use login::{LoginForm, LOGIN_FIELDS};
pub use session::{FormSession, SubmitGate, SubmitOutcome};
