//! Common test utilities and fixtures for integration tests.
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set the DATABASE_URL
//! env var). Tests share one `flashcards` table and reset it between
//! scenarios, so run them serially:
//!
//! ```sh
//! cargo test -- --ignored --test-threads=1
//! ```

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use cardbox_backend::db::Database;
use cardbox_backend::{router, AppState};

/// Test context containing database connection and test router.
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

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = router(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Empty the flashcards table and restart the id sequence.
    pub async fn reset(&self) {
        sqlx::query("TRUNCATE flashcards RESTART IDENTITY")
            .execute(self.db.pool())
            .await
            .expect("Failed to reset flashcards table");
    }
}
