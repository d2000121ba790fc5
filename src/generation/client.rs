use std::{sync::Arc, time::Duration};
use tracing::{debug, instrument};

use crate::{
    extractor::ExtractedContent,
    generation::{
        backend::{GenerationOptions, GenerativeBackend},
        errors::GenerationError,
        prompts,
        retry::RetryPolicy,
    },
};

pub const MAX_ATTEMPTS: u32 = 3;
pub const BACKOFF_STEP: Duration = Duration::from_millis(1000);

pub const SUMMARY_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.7,
    max_tokens: 1024,
};

// Lower temperature keeps the translation literal.
pub const TRANSLATION_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.3,
    max_tokens: 2048,
};

pub fn default_retry_policy() -> RetryPolicy<GenerationError> {
    RetryPolicy::linear(MAX_ATTEMPTS, BACKOFF_STEP, GenerationError::is_retryable)
}

/// One retried model call with fixed options. Blank output counts as a
/// (retryable) failure, never as success.
#[derive(Clone)]
pub struct GenerationClient {
    backend: Arc<dyn GenerativeBackend>,
    options: GenerationOptions,
    policy: RetryPolicy<GenerationError>,
    task: &'static str,
}

impl GenerationClient {
    pub fn new(
        backend: Arc<dyn GenerativeBackend>,
        options: GenerationOptions,
        policy: RetryPolicy<GenerationError>,
        task: &'static str,
    ) -> Self {
        Self {
            backend,
            options,
            policy,
            task,
        }
    }

    pub async fn call(&self, prompt: &str) -> Result<String, GenerationError> {
        self.policy
            .run(self.task, move |attempt| async move {
                debug!(task = self.task, attempt, "calling generative backend");
                let text = self.backend.generate(prompt, self.options).await?;
                let text = text.trim();
                if text.is_empty() {
                    return Err(GenerationError::EmptyOutput(self.task));
                }
                Ok(text.to_string())
            })
            .await
    }
}

#[derive(Clone)]
pub struct Summarizer {
    client: GenerationClient,
}

impl Summarizer {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self::with_policy(backend, default_retry_policy())
    }

    pub fn with_policy(
        backend: Arc<dyn GenerativeBackend>,
        policy: RetryPolicy<GenerationError>,
    ) -> Self {
        Self {
            client: GenerationClient::new(backend, SUMMARY_OPTIONS, policy, "summary"),
        }
    }

    #[instrument(skip_all, fields(title = %content.title))]
    pub async fn summarize(&self, content: &ExtractedContent) -> Result<String, GenerationError> {
        let prompt = prompts::summary_prompt(&content.title, &content.body);
        self.client.call(&prompt).await
    }
}

/// Translates an English summary into Urdu. Only ever fed summaries, never
/// raw page content.
#[derive(Clone)]
pub struct Translator {
    client: GenerationClient,
}

impl Translator {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self::with_policy(backend, default_retry_policy())
    }

    pub fn with_policy(
        backend: Arc<dyn GenerativeBackend>,
        policy: RetryPolicy<GenerationError>,
    ) -> Self {
        Self {
            client: GenerationClient::new(backend, TRANSLATION_OPTIONS, policy, "translation"),
        }
    }

    #[instrument(skip_all)]
    pub async fn translate(&self, english_summary: &str) -> Result<String, GenerationError> {
        let prompt = prompts::translation_prompt(english_summary);
        self.client.call(&prompt).await
    }
}
