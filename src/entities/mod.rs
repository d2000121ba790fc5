use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// What the pipeline hands to the store after both model calls succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSummary {
    pub url: String,
    pub title: String,
    pub english: String,
    pub urdu: String,
}

/// --- Tables ---

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct StoredRecord {
    pub id: Uuid,
    pub url: String, // unique
    pub title: String,
    #[sqlx(rename = "english_summary")]
    pub english: String,
    #[sqlx(rename = "urdu_summary")]
    pub urdu: String,
    pub created_at: DateTime<Utc>,
}
