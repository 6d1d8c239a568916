//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating test data
//! - Authentication helpers
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use spellquest_backend::db::Database;
use spellquest_backend::models::Profile;
use spellquest_backend::{router, AppState};
use spelling_core::IntervalScheduler;

/// Test context containing database connection and test server.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            scheduler: Arc::new(IntervalScheduler::default()),
        };

        let app = router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test profile and return its ID and token.
    pub async fn create_test_profile(&self, name: Option<&str>) -> (Uuid, String) {
        let profile = self
            .db
            .create_profile(name)
            .await
            .expect("Failed to create test profile");
        (profile.id, profile.token)
    }

    /// Get profile by token.
    pub async fn get_profile_by_token(&self, token: &str) -> Option<Profile> {
        self.db.get_profile_by_token(token).await.ok().flatten()
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Clean up test data for a profile.
    ///
    /// Call this after tests to remove test data.
    pub async fn cleanup_profile(&self, profile_id: Uuid) {
        // Delete in order due to foreign keys
        let _ = sqlx::query("DELETE FROM attempts WHERE profile_id = $1")
            .bind(profile_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM sessions WHERE profile_id = $1")
            .bind(profile_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM word_stats WHERE profile_id = $1")
            .bind(profile_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM words WHERE profile_id = $1")
            .bind(profile_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM word_lists WHERE profile_id = $1")
            .bind(profile_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM settings WHERE profile_id = $1")
            .bind(profile_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(profile_id)
            .execute(self.db.pool())
            .await;
    }
}
