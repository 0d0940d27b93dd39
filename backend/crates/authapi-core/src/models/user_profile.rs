use chrono::{DateTime, Utc};

/// Blob value written for a freshly registered user.
pub const EMPTY_BLOB: &str = "{}";

/// Profile row as persisted. The two blobs are raw JSON text; use
/// [`crate::decode_blob`] to read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    pub profile_data: String,
    pub settings: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
