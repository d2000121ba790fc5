pub mod backend;
pub mod backoff;
pub mod client;
pub mod errors;
pub mod gemini;
pub mod prompts;
pub mod retry;

pub use backend::{GenerationOptions, GenerativeBackend};
pub use client::{GenerationClient, Summarizer, Translator, default_retry_policy};
pub use errors::GenerationError;
pub use gemini::GeminiBackend;
pub use retry::RetryPolicy;
