use async_trait::async_trait;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use tracing::info;

use crate::{
    entities::{NewSummary, StoredRecord},
    repositories::{PersistenceError, SummaryStore},
};

const MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL-backed store. Built once at startup and passed around
/// explicitly; call `close` on shutdown.
#[derive(Clone)]
pub struct PgSummaryStore {
    pool: Pool<Postgres>,
}

impl PgSummaryStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, PersistenceError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
            .map_err(|e| PersistenceError::Database(e.to_string()))?;

        info!("connected to database");
        Ok(Self::new(pool))
    }

    /// Applies pending migrations; no-op if up-to-date.
    pub async fn migrate(&self) -> Result<(), PersistenceError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| PersistenceError::Database(e.to_string()))
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}

fn map_sqlx_error(err: sqlx::Error, url: &str) -> PersistenceError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            PersistenceError::DuplicateUrl(url.to_string())
        }
        _ => PersistenceError::Database(err.to_string()),
    }
}

#[async_trait]
impl SummaryStore for PgSummaryStore {
    async fn save(&self, summary: NewSummary) -> Result<StoredRecord, PersistenceError> {
        sqlx::query_as::<_, StoredRecord>(
            r#"
            INSERT INTO blog_summaries (url, title, english_summary, urdu_summary)
            VALUES ($1, $2, $3, $4)
            RETURNING id, url, title, english_summary, urdu_summary, created_at
            "#,
        )
        .bind(&summary.url)
        .bind(&summary.title)
        .bind(&summary.english)
        .bind(&summary.urdu)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, &summary.url))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<StoredRecord>, PersistenceError> {
        sqlx::query_as::<_, StoredRecord>(
            r#"
            SELECT id, url, title, english_summary, urdu_summary, created_at
            FROM blog_summaries
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, url))
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| PersistenceError::Database(e.to_string()))?;
        Ok(())
    }
}
