use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::pipeline::PipelineSuccess;

const MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl SendUrlRequest {
    /// Returns the trimmed URL, or the message reported to the caller.
    pub fn validate(&self) -> Result<&str, String> {
        let url = self.url.as_deref().map(str::trim).unwrap_or_default();
        if url.is_empty() {
            return Err("Missing URL".to_string());
        }
        if url.len() > MAX_URL_LENGTH {
            return Err("URL too long".to_string());
        }
        Ok(url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Success,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetadata {
    /// Extracted body length in characters.
    pub content_length: usize,
    /// Milliseconds spent in the pipeline.
    pub processing_time: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub success: bool,
    pub original_url: String,
    pub title: String,
    pub english_summary: String,
    pub urdu_summary: String,
    pub saved_to_database: bool,
    pub database_status: DatabaseStatus,
    pub metadata: SummaryMetadata,
}

impl From<PipelineSuccess> for SummaryResponse {
    fn from(success: PipelineSuccess) -> Self {
        Self {
            success: true,
            original_url: success.url,
            title: success.title,
            english_summary: success.english,
            urdu_summary: success.urdu,
            saved_to_database: success.persisted,
            database_status: if success.persisted {
                DatabaseStatus::Success
            } else {
                DatabaseStatus::Failed
            },
            metadata: SummaryMetadata {
                content_length: success.content_length,
                processing_time: success.elapsed.as_millis() as u64,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
