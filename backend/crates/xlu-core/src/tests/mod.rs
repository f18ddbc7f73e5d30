
use crate::{CoreError, Result, UserRecord, UserStore};

use std::sync::Mutex;

use async_trait::async_trait;

/// In-memory store assigning sequential ids, mirroring the SQLite repository.
#[derive(Default)]
pub(crate) struct MemoryStore {
    records: Mutex<Vec<UserRecord>>,
    fail_saves_after: Option<usize>,
}

impl MemoryStore {
    pub(crate) fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_saves_after: None,
        }
    }

    /// Store whose `save` starts failing once `count` records exist.
    pub(crate) fn failing_after(count: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_saves_after: Some(count),
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<UserRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.id == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.email == email)
            .min_by_key(|r| r.id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>> {
        Ok(self.snapshot())
    }

    async fn save(&self, mut record: UserRecord) -> Result<UserRecord> {
        let mut records = self.records.lock().unwrap();

        if let Some(limit) = self.fail_saves_after
            && records.len() >= limit
        {
            return Err(CoreError::store("disk full"));
        }

        match record.id {
            Some(id) => {
                let slot = records
                    .iter_mut()
                    .find(|r| r.id == Some(id))
                    .ok_or_else(|| CoreError::store(format!("User {} not found", id)))?;
                *slot = record.clone();
            }
            None => {
                let next_id = records.iter().filter_map(|r| r.id).max().unwrap_or(0) + 1;
                record.id = Some(next_id);
                records.push(record.clone());
            }
        }

        Ok(record)
    }
}

pub(crate) fn persisted(id: i64, username: &str, city: &str, email: &str) -> UserRecord {
    UserRecord {
        id: Some(id),
        username: username.to_string(),
        city: city.to_string(),
        email: email.to_string(),
    }
}

pub(crate) fn row(id: Option<i64>, username: &str, city: &str, email: &str) -> crate::SheetRow {
    crate::SheetRow {
        id,
        username: username.to_string(),
        city: city.to_string(),
        email: email.to_string(),
    }
}
