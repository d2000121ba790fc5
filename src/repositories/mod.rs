pub mod errors;
pub mod memory;
pub mod summary;

use async_trait::async_trait;

use crate::entities::{NewSummary, StoredRecord};

pub use errors::PersistenceError;
pub use memory::MemorySummaryStore;
pub use summary::PgSummaryStore;

/// Durable storage for finished summaries, keyed by URL. Uniqueness is the
/// store's job; the pipeline only reports whether the save worked.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn save(&self, summary: NewSummary) -> Result<StoredRecord, PersistenceError>;

    async fn find_by_url(&self, url: &str) -> Result<Option<StoredRecord>, PersistenceError>;

    /// Cheap liveness check used by `/healthz`.
    async fn ping(&self) -> Result<(), PersistenceError>;
}
