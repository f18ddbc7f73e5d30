use crate::{DbError, Result};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use xlu_core::{Result as CoreResult, UserRecord, UserStore};

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    city: String,
    email: String,
}

impl From<UserRow> for UserRecord {
    fn from(r: UserRow) -> Self {
        UserRecord {
            id: Some(r.id),
            username: r.username,
            city: r.city,
            email: r.email,
        }
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return its assigned id. Any id already on
    /// `user` is ignored.
    pub async fn create(&self, user: &UserRecord) -> Result<i64> {
        let result = sqlx::query(
            r#"
              INSERT INTO users (username, city, email)
              VALUES (?, ?, ?)
              "#,
        )
        .bind(&user.username)
        .bind(&user.city)
        .bind(&user.email)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update(&self, id: i64, user: &UserRecord) -> Result<()> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET username = ?, city = ?, email = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.username)
        .bind(&user.city)
        .bind(&user.email)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, username, city, email
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }

    /// Email is not unique; the oldest (lowest id) match wins.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, username, city, email
              FROM users
              WHERE email = ?
              ORDER BY id ASC
              LIMIT 1
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }

    pub async fn find_all(&self) -> Result<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, username, city, email
              FROM users
              ORDER BY id ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> CoreResult<Option<UserRecord>> {
        Ok(UserRepository::find_by_id(self, id).await?)
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<UserRecord>> {
        Ok(UserRepository::find_by_email(self, email).await?)
    }

    async fn find_all(&self) -> CoreResult<Vec<UserRecord>> {
        Ok(UserRepository::find_all(self).await?)
    }

    async fn save(&self, mut record: UserRecord) -> CoreResult<UserRecord> {
        match record.id {
            Some(id) => self.update(id, &record).await?,
            None => record.id = Some(self.create(&record).await?),
        }

        Ok(record)
    }
}
