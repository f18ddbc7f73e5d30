use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    xlu_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user row directly, bypassing the repository
pub async fn insert_user(pool: &SqlitePool, username: &str, city: &str, email: &str) -> i64 {
    sqlx::query("INSERT INTO users (username, city, email) VALUES (?, ?, ?)")
        .bind(username)
        .bind(city)
        .bind(email)
        .execute(pool)
        .await
        .expect("Failed to insert test user")
        .last_insert_rowid()
}
