/// A persisted (or about to be persisted) user.
///
/// `id` stays `None` until the store assigns one on first save and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Option<i64>,

    pub username: String,
    pub city: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(username: String, city: String, email: String) -> Self {
        Self {
            id: None,
            username,
            city,
            email,
        }
    }
}
