use sqlx::SqlitePool;
use xlu_config::UploadConfig;
use xlu_db::UserRepository;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub upload: UploadConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, upload: UploadConfig) -> Self {
        Self { pool, upload }
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }
}
