use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub zip_code: String,
    /// Soft-delete marker. Deleted users are kept but never returned by reads.
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
