// PostgreSQL access for the ignored integration tests.
//
// Expects TEST_DATABASE_URL, from the environment or a `.env` file.

use crate::shared::infrastructure::database::{connect, migrate};
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

pub async fn test_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let pool = connect(&url, 2, Duration::from_secs(5))
        .await
        .expect("failed to connect to the test database");
    migrate(&pool).await.expect("failed to run migrations");
    pool
}

/// Unique values keep tests independent on a shared database.
pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
