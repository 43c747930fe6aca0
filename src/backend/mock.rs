//! Fixture-backed directory client
//!
//! Plays the role of the network layer: an embedded roster, a credential
//! check for sign-in, and knobs for simulated latency and injected listing
//! failures so the loading and error paths stay exercisable.

use super::traits::DirectoryClient;
use crate::state::{Session, User};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use uuid::Uuid;

/// Embedded roster fixture.
const USERS_FIXTURE: &str = include_str!("fixtures/users.json");

/// Every fixture account signs in with this password.
pub const FIXTURE_PASSWORD: &str = "password123";

/// In-process stand-in for the directory service.
pub struct FixtureDirectory {
    users: Vec<User>,
    latency: Option<Duration>,
    listing_failure: Option<String>,
}

impl FixtureDirectory {
    /// Load the embedded fixture roster.
    pub fn new() -> Result<Self> {
        let users: Vec<User> = serde_json::from_str(USERS_FIXTURE)?;
        Ok(Self {
            users,
            latency: None,
            listing_failure: None,
        })
    }

    /// Delay every call, so loading states are visible in the UI.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make `list_users` fail with the given message until cleared.
    pub fn with_listing_failure(mut self, message: impl Into<String>) -> Self {
        self.listing_failure = Some(message.into());
        self
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl DirectoryClient for FixtureDirectory {
    async fn login(&mut self, email: &str, password: &str) -> Result<Session> {
        self.simulate_latency().await;

        let known = self.users.iter().any(|u| u.email == email);
        if !known || password != FIXTURE_PASSWORD {
            tracing::info!("rejected sign-in for {email}");
            return Err(anyhow!("Invalid email or password"));
        }

        tracing::info!("signed in {email}");
        Ok(Session {
            token: Uuid::new_v4(),
            email: email.to_string(),
            issued_at: Utc::now(),
        })
    }

    async fn list_users(&mut self) -> Result<Vec<User>> {
        self.simulate_latency().await;

        if let Some(message) = &self.listing_failure {
            return Err(anyhow!("{message}"));
        }
        Ok(self.users.clone())
    }
}
