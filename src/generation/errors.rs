use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// 429 or 5xx from the backend.
    #[error("generation backend returned {status}: {message}")]
    Transient { status: u16, message: String },

    #[error("generation backend rejected the request ({status}): {message}")]
    Permanent { status: u16, message: String },

    /// The backend answered but produced no text.
    #[error("no {0} generated")]
    EmptyOutput(&'static str),

    #[error("malformed generation response: {0}")]
    Malformed(String),

    #[error("generation request failed: {0}")]
    Network(String),
}

impl GenerationError {
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 429 || (500..600).contains(&status) {
            Self::Transient { status, message }
        } else {
            Self::Permanent { status, message }
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transient { .. } | Self::EmptyOutput(_) => true,
            Self::Permanent { .. } | Self::Malformed(_) | Self::Network(_) => false,
        }
    }
}
