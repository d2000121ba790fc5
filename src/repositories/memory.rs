use async_trait::async_trait;
use chrono::Utc;
use dashmap::{DashMap, mapref::entry::Entry};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    entities::{NewSummary, StoredRecord},
    repositories::{PersistenceError, SummaryStore},
};

/// Process-local store with the same unique-URL rule as the database.
#[derive(Clone, Default)]
pub struct MemorySummaryStore {
    records: Arc<DashMap<String, StoredRecord>>,
}

impl MemorySummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl SummaryStore for MemorySummaryStore {
    async fn save(&self, summary: NewSummary) -> Result<StoredRecord, PersistenceError> {
        match self.records.entry(summary.url.clone()) {
            Entry::Occupied(_) => Err(PersistenceError::DuplicateUrl(summary.url)),
            Entry::Vacant(slot) => {
                let record = StoredRecord {
                    id: Uuid::new_v4(),
                    url: summary.url,
                    title: summary.title,
                    english: summary.english,
                    urdu: summary.urdu,
                    created_at: Utc::now(),
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<StoredRecord>, PersistenceError> {
        Ok(self.records.get(url).map(|entry| entry.value().clone()))
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        Ok(())
    }
}
