use serde::{Deserialize, Serialize};

/// Hard cap on the body length, in characters, before the marker is appended.
pub const MAX_CONTENT_LENGTH: usize = 10_000;
pub const TRUNCATION_MARKER: &str = "...";
/// Title used when neither `<title>`, `<h1>` nor a post-title class yields text.
pub const DEFAULT_TITLE: &str = "Untitled Blog Post";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub title: String,
    pub body: String,
}

impl ExtractedContent {
    /// Body length in characters (not bytes).
    pub fn content_length(&self) -> usize {
        self.body.chars().count()
    }
}

/// Which content region the body came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodySelection {
    pub text: String,
    /// `None` when no selector cleared the threshold and the whole `<body>` was used.
    pub selector: Option<&'static str>,
}
