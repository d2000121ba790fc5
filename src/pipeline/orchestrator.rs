use std::{sync::Arc, time::Instant};
use tracing::{error, info, instrument, warn};

use crate::{
    entities::NewSummary,
    extractor::{self, MIN_CONTENT_LENGTH},
    fetcher::{FetchError, PageFetcher, validate_url},
    generation::{Summarizer, Translator},
    pipeline::outcome::{PipelineError, PipelineFailure, PipelineOutcome, PipelineSuccess, Stage},
    repositories::SummaryStore,
};

/// Every run walks these states in order; a failure in any of the first five
/// ends the run there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Validating,
    Fetching,
    Extracting,
    Summarizing,
    Translating,
    Persisting,
    Done,
}

/// fetch → extract → summarize → translate → persist, strictly in sequence.
/// Holds no per-run state, so one instance serves concurrent requests.
pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
    summarizer: Summarizer,
    translator: Translator,
    store: Arc<dyn SummaryStore>,
}

fn enter(state: PipelineState) {
    info!(state = ?state, "entering pipeline state");
}

impl Pipeline {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        summarizer: Summarizer,
        translator: Translator,
        store: Arc<dyn SummaryStore>,
    ) -> Self {
        Self {
            fetcher,
            summarizer,
            translator,
            store,
        }
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn run(&self, url: &str) -> PipelineOutcome {
        match self.execute(url).await {
            Ok(success) => {
                info!(
                    persisted = success.persisted,
                    elapsed_ms = success.elapsed.as_millis() as u64,
                    "pipeline finished"
                );
                PipelineOutcome::Success(success)
            }
            Err(failure) => {
                warn!(stage = %failure.stage, error = %failure.error, "pipeline failed");
                PipelineOutcome::Failure(failure)
            }
        }
    }

    async fn execute(&self, raw_url: &str) -> Result<PipelineSuccess, PipelineFailure> {
        let started = Instant::now();

        enter(PipelineState::Validating);
        let url = validate_url(raw_url).map_err(|e| {
            PipelineFailure::new(Stage::Validate, PipelineError::InvalidUrl(invalid_reason(e)))
        })?;
        let url = url.to_string();

        enter(PipelineState::Fetching);
        let page = self.fetcher.fetch(&url).await.map_err(|e| match e {
            FetchError::InvalidUrl(reason) => {
                PipelineFailure::new(Stage::Validate, PipelineError::InvalidUrl(reason))
            }
            other => PipelineFailure::new(Stage::Fetch, PipelineError::Fetch(other)),
        })?;

        enter(PipelineState::Extracting);
        let content = extractor::extract(&page.html);
        drop(page);

        let content_length = content.content_length();
        if extractor::is_too_short(&content.body) {
            return Err(PipelineFailure::new(
                Stage::Extract,
                PipelineError::ExtractionTooShort {
                    length: content_length,
                    min: MIN_CONTENT_LENGTH,
                },
            ));
        }

        enter(PipelineState::Summarizing);
        let english = self
            .summarizer
            .summarize(&content)
            .await
            .map_err(|e| PipelineFailure::new(Stage::Summarize, PipelineError::Generation(e)))?;

        enter(PipelineState::Translating);
        let urdu = self
            .translator
            .translate(&english)
            .await
            .map_err(|e| PipelineFailure::new(Stage::Translate, PipelineError::Generation(e)))?;

        enter(PipelineState::Persisting);
        let persisted = match self
            .store
            .save(NewSummary {
                url: url.clone(),
                title: content.title.clone(),
                english: english.clone(),
                urdu: urdu.clone(),
            })
            .await
        {
            Ok(record) => {
                info!(record_id = %record.id, "summary saved");
                true
            }
            Err(e) => {
                // the summaries are still returned to the caller
                error!(error = %e, "failed to persist summary");
                false
            }
        };

        enter(PipelineState::Done);
        Ok(PipelineSuccess {
            url,
            title: content.title,
            english,
            urdu,
            persisted,
            content_length,
            elapsed: started.elapsed(),
        })
    }
}

fn invalid_reason(err: FetchError) -> String {
    match err {
        FetchError::InvalidUrl(reason) => reason,
        other => other.to_string(),
    }
}
