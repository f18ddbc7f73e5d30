//! Record store seam
//!
//! The reconciliation engine only talks to persistence through this trait,
//! so the SQLite repository and in-memory test stores are interchangeable.

use crate::{Result, UserRecord};

use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>>;

    /// Email is not unique; implementations return the lowest id on ties.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    async fn find_all(&self) -> Result<Vec<UserRecord>>;

    /// Insert when `record.id` is `None`, update otherwise.
    /// Returns the record as persisted (with its id).
    async fn save(&self, record: UserRecord) -> Result<UserRecord>;
}
