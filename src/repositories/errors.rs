use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("a summary for {0} already exists")]
    DuplicateUrl(String),

    #[error("database error: {0}")]
    Database(String),
}
