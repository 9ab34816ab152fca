use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One audit row per accepted demo request, written after the Sendy
/// attempt completes. Rows are never updated.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FormSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub sendy_status: String,
    pub sendy_response: String,
    pub created_at: DateTime<Utc>,
}

/// Stored as text; the column `CHECK` allows exactly these values and
/// defaults to `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendyStatus {
    Pending,
    Success,
    Failed,
}

impl SendyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SendyStatus::Pending => "pending",
            SendyStatus::Success => "success",
            SendyStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SendyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
