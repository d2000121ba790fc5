use async_trait::async_trait;

use crate::generation::errors::GenerationError;

/// Sampling knobs passed through to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Given a prompt, return generated text or fail. An `Ok` may still be empty;
/// callers decide what an empty answer means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, GenerationError>;
}
