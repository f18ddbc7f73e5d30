use crate::UserRecord;

/// One data row of a user spreadsheet, in column order id, username, city, email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    pub id: Option<i64>,
    pub username: String,
    pub city: String,
    pub email: String,
}

impl SheetRow {
    /// Email usable as a lookup key (non-blank).
    pub fn lookup_email(&self) -> Option<&str> {
        if self.email.trim().is_empty() {
            None
        } else {
            Some(&self.email)
        }
    }
}

impl From<UserRecord> for SheetRow {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            city: record.city,
            email: record.email,
        }
    }
}
