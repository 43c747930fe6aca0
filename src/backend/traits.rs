//! Trait abstraction for the directory backend to enable mocking in tests

use crate::state::{Session, User};
use anyhow::Result;
use async_trait::async_trait;

/// Operations the app needs from a user directory.
///
/// Login is the injected submit collaborator for the sign-in form; listing is
/// the "fetch collection, items or an error" contract the roster view uses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Authenticate and obtain a session.
    async fn login(&mut self, email: &str, password: &str) -> Result<Session>;

    /// Fetch the full user roster.
    async fn list_users(&mut self) -> Result<Vec<User>>;
}
