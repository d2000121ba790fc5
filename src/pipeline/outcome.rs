use serde::Serialize;
use std::{fmt, time::Duration};
use thiserror::Error;

use crate::{fetcher::FetchError, generation::GenerationError};

/// Stage a failed run stopped at. Persisting is absent: it never fails a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Validate,
    Fetch,
    Extract,
    Summarize,
    Translate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validate => "validate",
            Stage::Fetch => "fetch",
            Stage::Extract => "extract",
            Stage::Summarize => "summarize",
            Stage::Translate => "translate",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Fetch(FetchError),

    #[error("extracted content is too short ({length} characters, need at least {min})")]
    ExtractionTooShort { length: usize, min: usize },

    #[error(transparent)]
    Generation(GenerationError),
}

/// Flat, exhaustively matchable view of what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    FetchTimeout,
    FetchHttpError { status: u16 },
    FetchFailed,
    ExtractionTooShort,
    GenerationTransient { status: u16 },
    GenerationPermanent,
}

impl PipelineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidUrl(_) | Self::Fetch(FetchError::InvalidUrl(_)) => FailureKind::InvalidUrl,
            Self::Fetch(FetchError::Timeout(_)) => FailureKind::FetchTimeout,
            Self::Fetch(FetchError::Http { status }) => FailureKind::FetchHttpError {
                status: status.as_u16(),
            },
            Self::Fetch(_) => FailureKind::FetchFailed,
            Self::ExtractionTooShort { .. } => FailureKind::ExtractionTooShort,
            Self::Generation(GenerationError::Transient { status, .. }) => {
                FailureKind::GenerationTransient { status: *status }
            }
            Self::Generation(_) => FailureKind::GenerationPermanent,
        }
    }

    /// Caller's fault rather than ours or a third party's.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            FailureKind::InvalidUrl | FailureKind::ExtractionTooShort
        )
    }

    /// HTTP status the boundary answers with.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSuccess {
    pub url: String,
    pub title: String,
    pub english: String,
    pub urdu: String,
    pub persisted: bool,
    pub content_length: usize,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct PipelineFailure {
    pub stage: Stage,
    pub error: PipelineError,
}

impl PipelineFailure {
    pub fn new(stage: Stage, error: PipelineError) -> Self {
        Self { stage, error }
    }

    pub fn message(&self) -> String {
        format!("{} stage failed: {}", self.stage, self.error)
    }
}

/// The only thing a pipeline run exposes.
#[derive(Debug)]
pub enum PipelineOutcome {
    Success(PipelineSuccess),
    Failure(PipelineFailure),
}
